//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and user prompting.

use std::io::{self, BufRead, IsTerminal, Write};

pub fn prompt(message: &str) -> nestch::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).map_err(|e| {
        nestch::Error::internal_io(e.to_string(), Some("read confirmation".to_string()))
    })?;

    Ok(line.trim().to_string())
}

/// Ask a yes/no question. Anything but `y`/`yes` (including EOF) is a no.
pub fn confirm(message: &str) -> nestch::Result<bool> {
    let answer = prompt(&format!("{} [y/N] ", message))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}


// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
