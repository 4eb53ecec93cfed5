//! Password composition rule checking
//!
//! This library checks passwords against a fixed set of composition rules
//! and reads them from the terminal without echoing what is typed.
//!
//! # Rules
//!
//! A password is strong when it is at least 8 characters long and contains
//! an ASCII uppercase letter, an ASCII lowercase letter, an ASCII digit and
//! one of `!@#$%^&*()-_+=<>?/`. Every rule is checked on every call, so a
//! weak password reports all of its violations at once.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_rules::{evaluate_password, prompt_masked_line, LineEnd};
//!
//! let line = prompt_masked_line("Enter password: ").expect("terminal unavailable");
//! if line.end == LineEnd::Enter {
//!     let evaluation = evaluate_password(&line.secret);
//!     println!("Strength: {:?}", evaluation.strength());
//!     for reason in &evaluation.reasons {
//!         println!("- {reason}");
//!     }
//! }
//! ```

// Internal modules
mod evaluator;
mod masked_input;
mod sections;
mod types;

pub mod report;
pub mod session;

// Public API
pub use evaluator::evaluate_password;
pub use masked_input::{
    decode_key, prompt_masked_line, read_masked_line, InputError, Key, LineEnd, MaskedLine,
    RawModeGuard, StreamTerminal, SystemTerminal, Terminal, ERASE_SEQUENCE, MASK_GLYPH,
};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use types::{PasswordEvaluation, PasswordStrength};
