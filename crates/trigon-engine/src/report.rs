//! Terminal failure reporting.
//!
//! The process has exactly one error boundary (`main`). Whatever reaches it is
//! stringified, logged, and shown to the user in red; the kind of error is not
//! inspected.

use std::io::{IsTerminal, Write};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Formats the user-visible message for `err`, including its context chain.
pub fn render_message(err: &anyhow::Error, colored: bool) -> String {
    let text = format!("Error: {err:#}");
    if colored {
        format!("{RED}{text}{RESET}")
    } else {
        text
    }
}

/// Logs `err` and writes it to stderr, red when stderr is a terminal.
pub fn report_fatal(err: &anyhow::Error) {
    log::error!("{err:#}");

    let stderr = std::io::stderr();
    let colored = stderr.is_terminal();
    let mut out = stderr.lock();
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = writeln!(out, "{}", render_message(err, colored));
}
