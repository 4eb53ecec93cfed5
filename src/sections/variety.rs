//! Character variety sections - uppercase, lowercase and digit checks.
//!
//! Classes are ASCII only: `É` is not an uppercase letter and `٣` is not
//! a digit for these rules.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

fn contains(password: &SecretString, class: fn(&char) -> bool) -> bool {
    password.expose_secret().chars().any(|c| class(&c))
}

/// Checks for at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !contains(password, char::is_ascii_uppercase) {
        return Some("Missing uppercase letter");
    }
    None
}

/// Checks for at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !contains(password, char::is_ascii_lowercase) {
        return Some("Missing lowercase letter");
    }
    None
}

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !contains(password, char::is_ascii_digit) {
        return Some("Missing digit");
    }
    None
}
