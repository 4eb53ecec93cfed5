//! Evaluation result types.

/// Verdict of a rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Every composition rule passed.
    Strong,
    /// At least one rule failed.
    Weak,
}

/// Outcome of evaluating one password against the composition rules.
///
/// `reasons` holds one message per failed rule, in rule-check order.
/// An empty list means the password is strong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    /// Strong when no rule failed, weak otherwise.
    pub fn strength(&self) -> PasswordStrength {
        if self.reasons.is_empty() {
            PasswordStrength::Strong
        } else {
            PasswordStrength::Weak
        }
    }

    /// Shorthand for `strength() == PasswordStrength::Strong`.
    pub fn is_strong(&self) -> bool {
        self.strength() == PasswordStrength::Strong
    }
}
