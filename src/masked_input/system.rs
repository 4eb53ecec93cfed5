//! Controlling-terminal backend built on crossterm.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::{Key, Terminal};

const ESC: char = '\x1b';

/// The process's controlling terminal.
///
/// crossterm picks termios on Unix and the console API on Windows, and
/// keeps the attributes it replaced so `leave_raw` puts back exactly what
/// was there before.
#[derive(Debug, Default)]
pub struct SystemTerminal {
    // Second half of an Alt chord, which a terminal sends as ESC + char.
    pending: Option<Key>,
}

impl SystemTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns one key event into the next key to hand out, queueing the
    /// character of an Alt chord behind its ESC prefix.
    fn translate(&mut self, event: &KeyEvent) -> Option<Key> {
        let key = decode_key(event)?;
        if event.modifiers.contains(KeyModifiers::ALT) && matches!(key, Key::Char(_)) {
            self.pending = Some(key);
            return Some(Key::Char(ESC));
        }
        Some(key)
    }
}

impl Terminal for SystemTerminal {
    fn is_raw(&self) -> io::Result<bool> {
        terminal::is_raw_mode_enabled()
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    fn next_key(&mut self) -> io::Result<Key> {
        if let Some(key) = self.pending.take() {
            return Ok(key);
        }
        loop {
            match event::read() {
                Ok(Event::Key(key_event)) => {
                    if let Some(key) = self.translate(&key_event) {
                        return Ok(key);
                    }
                }
                // Resize, focus, mouse and paste events carry no keystroke.
                Ok(_) => {}
                Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("terminal input closed");
                    return Ok(Key::EndOfInput);
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Control character a terminal sends for Ctrl + `c`, if there is one.
fn control_char(c: char) -> Option<char> {
    match c {
        ' ' | '@' | '2' => Some('\0'),
        '4'..='7' => Some(char::from(c as u8 - b'4' + 0x1c)),
        'a'..='z' | 'A'..='Z' | '[' | '\\' | ']' | '^' | '_' => {
            Some(char::from(c.to_ascii_uppercase() as u8 & 0x1f))
        }
        _ => None,
    }
}

/// Maps a crossterm key event to the reader's key alphabet.
///
/// Every key that produces a character becomes [`Key::Char`], including
/// Tab, Esc and Ctrl chords (as their control character). Ctrl+C and
/// Ctrl+D are [`Key::Interrupt`] and [`Key::EndOfInput`]. The Alt modifier
/// is not applied here; see `SystemTerminal` for the ESC prefix.
///
/// Returns `None` for key releases (reported on Windows) and for keys with
/// no character: arrows, navigation, function and media keys.
pub fn decode_key(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Char('\t')),
        KeyCode::Esc => Some(Key::Char(ESC)),
        KeyCode::Char('c' | 'C') if ctrl => Some(Key::Interrupt),
        KeyCode::Char('d' | 'D') if ctrl => Some(Key::EndOfInput),
        KeyCode::Char(c) if ctrl => Some(Key::Char(control_char(c).unwrap_or(c))),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}
