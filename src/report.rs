//! Console rendering of the rules banner and evaluation verdicts.

use std::io::{self, Write};

use crate::sections::{MIN_LENGTH, SPECIAL_CHARS};
use crate::types::PasswordEvaluation;

/// Prompt shown before each masked read.
pub const PROMPT: &str = "Enter password: ";

/// Writes the title and the list of rules.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🧪 Password Strength Tester")?;
    writeln!(
        out,
        "Password must be at least {MIN_LENGTH} characters long and contain:"
    )?;
    writeln!(out, "- At least one uppercase letter")?;
    writeln!(out, "- At least one lowercase letter")?;
    writeln!(out, "- At least one digit")?;
    writeln!(out, "- At least one special character ({SPECIAL_CHARS})")?;
    writeln!(out)
}

/// Writes the verdict, followed by the failed rules when weak.
pub fn write_evaluation<W: Write>(out: &mut W, evaluation: &PasswordEvaluation) -> io::Result<()> {
    if evaluation.is_strong() {
        return writeln!(out, "Strong password ✅");
    }
    writeln!(out, "Weak password ❌")?;
    writeln!(out, "Reasons:")?;
    for reason in &evaluation.reasons {
        writeln!(out, "- {reason}")?;
    }
    writeln!(out)
}

/// Writes the closing message shown once a strong password is entered.
pub fn write_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Great! Your password meets all security requirements!")
}
