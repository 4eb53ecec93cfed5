//! Scripted terminal used by the reader tests.

use std::collections::VecDeque;
use std::io;

use super::{Key, Terminal};

/// Replays a fixed key script and records every mode change.
///
/// Once the script is exhausted it reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    script: VecDeque<io::Result<Key>>,
    pub raw: bool,
    pub enters: usize,
    pub leaves: usize,
    pub reads_outside_raw: usize,
    pub fail_enter: bool,
    pub fail_leave: bool,
}

impl ScriptedTerminal {
    pub fn new(keys: Vec<Key>) -> Self {
        Self::with_results(keys.into_iter().map(Ok).collect())
    }

    pub fn with_results(script: Vec<io::Result<Key>>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Builds a script that types `text` and presses Enter.
    pub fn typing(text: &str) -> Self {
        let mut keys: Vec<Key> = text.chars().map(Key::Char).collect();
        keys.push(Key::Enter);
        Self::new(keys)
    }

    /// Builds a script that types each of `lines`, pressing Enter after each.
    pub fn typing_lines(lines: &[&str]) -> Self {
        let mut keys = Vec::new();
        for line in lines {
            keys.extend(line.chars().map(Key::Char));
            keys.push(Key::Enter);
        }
        Self::new(keys)
    }
}

impl Terminal for ScriptedTerminal {
    fn is_raw(&self) -> io::Result<bool> {
        Ok(self.raw)
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        if self.fail_enter {
            return Err(io::Error::other("not a terminal"));
        }
        self.enters += 1;
        self.raw = true;
        Ok(())
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        self.leaves += 1;
        if self.fail_leave {
            return Err(io::Error::other("tcsetattr failed"));
        }
        self.raw = false;
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<Key> {
        if !self.raw {
            self.reads_outside_raw += 1;
        }
        self.script.pop_front().unwrap_or(Ok(Key::EndOfInput))
    }
}
