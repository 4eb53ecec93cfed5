//! Scoped raw mode.

use std::io;
use std::ops::{Deref, DerefMut};

use super::Terminal;

/// Holds a terminal in raw mode for as long as the guard lives.
///
/// If the terminal was already raw when the guard was acquired it is left
/// untouched on both ends. Otherwise raw mode is entered on acquire and
/// left exactly once when the guard drops, whether that happens on a normal
/// return, through `?`, or while unwinding from a panic.
pub struct RawModeGuard<'a, T: Terminal> {
    terminal: &'a mut T,
    restore: bool,
}

impl<'a, T: Terminal> RawModeGuard<'a, T> {
    /// Switches `terminal` to raw mode unless it already is.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the current mode cannot be queried
    /// or raw mode cannot be entered. Nothing needs restoring in that case.
    pub fn acquire(terminal: &'a mut T) -> io::Result<Self> {
        let restore = if terminal.is_raw()? {
            false
        } else {
            terminal.enter_raw()?;
            #[cfg(feature = "tracing")]
            tracing::debug!("raw mode entered");
            true
        };
        Ok(Self { terminal, restore })
    }
}

impl<T: Terminal> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal> DerefMut for RawModeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if !self.restore {
            return;
        }
        match self.terminal.leave_raw() {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("raw mode left");
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%error, "failed to restore terminal mode");
                #[cfg(not(feature = "tracing"))]
                let _ = error;
            }
        }
    }
}
