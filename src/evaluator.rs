//! Password rule evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    digit_section, length_section, lowercase_section, special_char_section, uppercase_section,
    SectionResult,
};
use crate::types::PasswordEvaluation;

/// Sections in reporting order.
const SECTIONS: [(&str, fn(&SecretString) -> SectionResult); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_char_section),
];

/// Evaluates a password against every composition rule.
///
/// All rules run, even after one has failed, so the returned reasons
/// list every violation in a fixed order: length, uppercase, lowercase,
/// digit, special character.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` with one reason per failed rule.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    let mut reasons = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        if let Some(reason) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("rule failed: {}", _section_name);
            reasons.push(reason.to_string());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(failed = reasons.len(), "password evaluated");

    PasswordEvaluation { reasons }
}
