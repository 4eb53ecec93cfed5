//! Special character section.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters accepted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-_+=<>?/";

/// Checks that the password contains at least one of [`SPECIAL_CHARS`].
///
/// Punctuation outside the set (`.`, `,`, `~`, spaces, ...) does not count.
pub fn special_char_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
    {
        return Some("Missing special character (!@#$%^&*()-_+=<>?/)");
    }
    None
}
