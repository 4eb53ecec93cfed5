//! Masked line input
//!
//! Reads one line from a terminal in raw mode, echoing [`MASK_GLYPH`] in
//! place of every typed character and erasing a glyph on backspace. The
//! terminal's previous mode is restored by [`RawModeGuard`] on every exit
//! path.

mod guard;
mod stream;
mod system;
#[cfg(test)]
pub(crate) mod testing;

use std::io::{self, Write};

use crossterm::tty::IsTty;
use secrecy::SecretString;
use thiserror::Error;

pub use guard::RawModeGuard;
pub use stream::StreamTerminal;
pub use system::{decode_key, SystemTerminal};

/// Glyph written for each accepted character.
pub const MASK_GLYPH: char = '*';

/// Moves the cursor back, blanks the glyph, moves back again.
pub const ERASE_SEQUENCE: &str = "\x08 \x08";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A keystroke as seen by the masked reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    /// Input closed or Ctrl+D.
    EndOfInput,
    /// Ctrl+C. Raw mode turns off signal generation, so it arrives as a key.
    Interrupt,
}

/// How a masked read finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    Enter,
    EndOfInput,
    Interrupted,
}

/// The text collected by a masked read and how the read ended.
///
/// On `EndOfInput` and `Interrupted` the secret holds whatever was typed
/// before the read stopped.
#[derive(Debug)]
pub struct MaskedLine {
    pub secret: SecretString,
    pub end: LineEnd,
}

/// A terminal that can be switched into raw mode and read key by key.
///
/// [`SystemTerminal`] is the implementation for the controlling terminal,
/// [`StreamTerminal`] the one for input that is not a terminal.
pub trait Terminal {
    fn is_raw(&self) -> io::Result<bool>;
    fn enter_raw(&mut self) -> io::Result<()>;
    fn leave_raw(&mut self) -> io::Result<()>;
    /// Blocks until the next keystroke the reader understands.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Reads one masked line from `terminal`, writing glyphs to `out`.
///
/// # Errors
///
/// Returns [`InputError::Io`] if raw mode cannot be entered or a read or
/// write fails. The terminal mode is restored before the error is
/// returned.
pub fn read_masked_line<T: Terminal, W: Write>(
    terminal: &mut T,
    out: &mut W,
) -> Result<MaskedLine, InputError> {
    let mut guard = RawModeGuard::acquire(terminal)?;
    let mut buffer = String::new();

    let end = loop {
        match guard.next_key()? {
            Key::Enter => break LineEnd::Enter,
            Key::EndOfInput => break LineEnd::EndOfInput,
            Key::Interrupt => break LineEnd::Interrupted,
            Key::Backspace => {
                if buffer.pop().is_some() {
                    out.write_all(ERASE_SEQUENCE.as_bytes())?;
                    out.flush()?;
                }
            }
            Key::Char(c) => {
                buffer.push(c);
                write!(out, "{MASK_GLYPH}")?;
                out.flush()?;
            }
        }
    };
    drop(guard);

    #[cfg(feature = "tracing")]
    {
        if end != LineEnd::Enter {
            tracing::warn!(?end, "masked read stopped before Enter");
        }
    }

    Ok(MaskedLine {
        secret: SecretString::new(buffer.into_boxed_str()),
        end,
    })
}

/// Prints `prompt` and reads a masked line from standard input.
///
/// Uses the terminal in raw mode when stdin is a terminal, and reads the
/// redirected stream as-is otherwise.
///
/// # Errors
///
/// See [`read_masked_line`].
pub fn prompt_masked_line(prompt: &str) -> Result<MaskedLine, InputError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(prompt.as_bytes())?;
    out.flush()?;
    if io::stdin().is_tty() {
        read_masked_line(&mut SystemTerminal::new(), &mut out)
    } else {
        read_masked_line(&mut StreamTerminal::new(io::stdin().lock()), &mut out)
    }
}
