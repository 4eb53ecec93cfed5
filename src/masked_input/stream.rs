//! Byte-stream backend for input that is not a terminal.

use std::io::{self, Read};

use super::{Key, Terminal};

/// Reads keys from a plain byte stream such as redirected stdin.
///
/// There is no terminal echo to turn off, so entering and leaving raw mode
/// do nothing. Bytes are decoded as UTF-8; an invalid sequence becomes
/// U+FFFD. `\n`, `\r` and `\r\n` end a line, DEL and BS erase, and the end
/// of the stream is [`Key::EndOfInput`].
#[derive(Debug)]
pub struct StreamTerminal<R> {
    reader: R,
    after_cr: bool,
}

impl<R: Read> StreamTerminal<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            after_cr: false,
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };
        let width = match first {
            0x00..=0x7f => return Ok(Some(char::from(first))),
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };
        let mut bytes = [first, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            match self.next_byte()? {
                Some(byte) => *slot = byte,
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }
        let decoded = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(decoded))
    }
}

impl<R: Read> Terminal for StreamTerminal<R> {
    fn is_raw(&self) -> io::Result<bool> {
        Ok(false)
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            let Some(c) = self.next_char()? else {
                return Ok(Key::EndOfInput);
            };
            let after_cr = std::mem::replace(&mut self.after_cr, c == '\r');
            let key = match c {
                '\n' if after_cr => continue,
                '\r' | '\n' => Key::Enter,
                '\x7f' | '\x08' => Key::Backspace,
                c => Key::Char(c),
            };
            return Ok(key);
        }
    }
}
