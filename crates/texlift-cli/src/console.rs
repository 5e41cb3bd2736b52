//! Terminal implementation of the pipeline collaborator

use std::io::{self, BufRead, Write};
use texlift_import::Console;

/// Interactive console: gates read stdin, progress goes to stdout
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn confirm(&mut self, question: &str, default_yes: bool) -> bool {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        print!("{} [{}] ", question, hint);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return default_yes;
        }
        match line.trim().to_lowercase().as_str() {
            "" => default_yes,
            "y" | "yes" => true,
            _ => false,
        }
    }

    fn progress(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Non-interactive console: every gate answers its default.
///
/// Used for `--format json`, where stdout must stay machine-readable.
pub struct QuietConsole;

impl Console for QuietConsole {
    fn confirm(&mut self, _question: &str, default_yes: bool) -> bool {
        default_yes
    }

    fn progress(&mut self, message: &str) {
        log::debug!("{}", message);
    }
}

/// Prompt for one line of input, falling back to a default
pub fn prompt_value(message: &str, default: &str) -> io::Result<String> {
    print!("{} [{}]: ", message, default);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim();
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    })
}
