//! Password rule sections
//!
//! Each section checks one composition rule and is evaluated
//! independently of the others.

mod length;
mod special;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use special::{special_char_section, SPECIAL_CHARS};
pub use variety::{digit_section, lowercase_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Rule failed with reason
/// - `None` - Rule passed
pub type SectionResult = Option<&'static str>;
