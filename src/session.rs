//! Interactive checking session - prompt, read, evaluate, repeat.

use std::io::Write;

use crate::evaluator::evaluate_password;
use crate::masked_input::{read_masked_line, InputError, LineEnd, Terminal};
use crate::report::{write_banner, write_evaluation, write_success, PROMPT};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A strong password was entered.
    Accepted,
    /// Input ended; the partial password was evaluated once.
    InputClosed,
    /// Ctrl+C; nothing was evaluated.
    Interrupted,
    /// Reading failed; nothing was evaluated.
    InputFailed,
}

/// Prints the banner, then prompts until a strong password is entered or
/// input stops.
///
/// A weak password is reported and prompted for again. When input ends
/// mid-line, the partial password is reported once and the session stops,
/// since nothing more can be typed. A failed read also stops the session;
/// it is not an error of the session itself.
///
/// # Errors
///
/// Returns [`InputError::Io`] only when writing to `out` fails.
pub fn run<T: Terminal, W: Write>(terminal: &mut T, out: &mut W) -> Result<SessionEnd, InputError> {
    write_banner(out)?;

    loop {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;

        let line = match read_masked_line(terminal, out) {
            Ok(line) => line,
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%error, "reading the password failed");
                #[cfg(not(feature = "tracing"))]
                let _ = error;
                writeln!(out)?;
                return Ok(SessionEnd::InputFailed);
            }
        };
        writeln!(out)?;

        if line.end == LineEnd::Interrupted {
            return Ok(SessionEnd::Interrupted);
        }

        let evaluation = evaluate_password(&line.secret);
        write_evaluation(out, &evaluation)?;

        if evaluation.is_strong() {
            write_success(out)?;
            out.flush()?;
            return Ok(SessionEnd::Accepted);
        }
        if line.end == LineEnd::EndOfInput {
            #[cfg(feature = "tracing")]
            tracing::info!("input closed before a strong password was entered");
            out.flush()?;
            return Ok(SessionEnd::InputClosed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masked_input::testing::ScriptedTerminal;
    use crate::masked_input::{Key, StreamTerminal};
    use pretty_assertions::assert_eq;
    use std::io::{self, Cursor};

    const BANNER: &str = "🧪 Password Strength Tester\n\
        Password must be at least 8 characters long and contain:\n\
        - At least one uppercase letter\n\
        - At least one lowercase letter\n\
        - At least one digit\n\
        - At least one special character (!@#$%^&*()-_+=<>?/)\n\
        \n";

    fn session(term: &mut impl Terminal) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let end = run(term, &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_retries_until_strong() {
        let mut term = ScriptedTerminal::typing_lines(&["short1!", "StrongPass1!"]);
        let (end, out) = session(&mut term);

        let expected = format!(
            "{BANNER}\
            Enter password: *******\n\
            Weak password ❌\n\
            Reasons:\n\
            - Password is too short (minimum 8 characters required)\n\
            - Missing uppercase letter\n\
            \n\
            Enter password: ************\n\
            Strong password ✅\n\
            Great! Your password meets all security requirements!\n"
        );
        assert_eq!(end, SessionEnd::Accepted);
        assert_eq!(out, expected);
        assert_eq!((term.enters, term.leaves), (2, 2));
    }

    #[test]
    fn test_session_stops_after_weak_partial_input() {
        let mut term = ScriptedTerminal::new(vec![Key::Char('a'), Key::Char('b'), Key::Char('c')]);
        let (end, out) = session(&mut term);

        let expected = format!(
            "{BANNER}\
            Enter password: ***\n\
            Weak password ❌\n\
            Reasons:\n\
            - Password is too short (minimum 8 characters required)\n\
            - Missing uppercase letter\n\
            - Missing digit\n\
            - Missing special character (!@#$%^&*()-_+=<>?/)\n\
            \n"
        );
        assert_eq!(end, SessionEnd::InputClosed);
        assert_eq!(out, expected);
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn test_session_accepts_strong_partial_input() {
        let mut term = ScriptedTerminal::new("StrongPass1!".chars().map(Key::Char).collect());
        let (end, out) = session(&mut term);
        assert_eq!(end, SessionEnd::Accepted);
        assert!(out.ends_with("Great! Your password meets all security requirements!\n"));
    }

    #[test]
    fn test_session_interrupt_prints_no_verdict() {
        let mut term = ScriptedTerminal::new(vec![Key::Char('a'), Key::Interrupt]);
        let (end, out) = session(&mut term);

        assert_eq!(end, SessionEnd::Interrupted);
        assert_eq!(out, format!("{BANNER}Enter password: *\n"));
        assert!(!term.raw);
    }

    #[test]
    fn test_session_read_failure_ends_quietly() {
        let mut term = ScriptedTerminal::with_results(vec![
            Ok(Key::Char('a')),
            Err(io::Error::other("device gone")),
        ]);
        let (end, out) = session(&mut term);

        assert_eq!(end, SessionEnd::InputFailed);
        assert_eq!(out, format!("{BANNER}Enter password: *\n"));
        assert_eq!((term.enters, term.leaves), (1, 1));
    }

    #[test]
    fn test_session_raw_mode_unavailable_ends_quietly() {
        let mut term = ScriptedTerminal::typing("StrongPass1!");
        term.fail_enter = true;
        let (end, out) = session(&mut term);

        assert_eq!(end, SessionEnd::InputFailed);
        assert_eq!(out, format!("{BANNER}Enter password: \n"));
    }

    #[test]
    fn test_session_reads_piped_input() {
        let mut term = StreamTerminal::new(Cursor::new(b"weak\nStrongPass1!\n".to_vec()));
        let (end, out) = session(&mut term);

        assert_eq!(end, SessionEnd::Accepted);
        assert_eq!(out.matches(PROMPT).count(), 2);
        assert!(out.contains("Enter password: ****\nWeak password ❌\n"));
        assert!(out.ends_with(
            "Enter password: ************\n\
            Strong password ✅\n\
            Great! Your password meets all security requirements!\n"
        ));
    }
}
