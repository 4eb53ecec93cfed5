use std::io;

use crossterm::tty::IsTty;
use pwd_rules::session::run;
use pwd_rules::{StreamTerminal, SystemTerminal};

#[cfg(feature = "tracing")]
fn initialize_tracing() {
    // Logs go to stderr and only when asked for, so the masked prompt stays clean.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn main() {
    #[cfg(feature = "tracing")]
    initialize_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if stdin.is_tty() {
        run(&mut SystemTerminal::new(), &mut out)
    } else {
        run(&mut StreamTerminal::new(stdin.lock()), &mut out)
    };

    // Every session end exits 0; a failed write to stdout is only reported.
    match result {
        Ok(_end) => {
            #[cfg(feature = "tracing")]
            tracing::info!(end = ?_end, "session finished");
        }
        Err(error) => eprintln!("{error}"),
    }
}
