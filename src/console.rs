//! Line-oriented operator console.
//!
//! All interactive flows talk to a [`Console`] trait so tests can script the
//! dialogue; the reconciliation logic itself never touches stdin/stdout.

use anyhow::{Context, Result};
use std::io::Write;

/// Trait for operator prompts and status output - enables scripting in tests.
pub trait Console {
    /// Prints a prompt (no trailing newline) and reads one trimmed line.
    fn prompt(&mut self, message: &str) -> Result<String>;

    /// Prints a status line.
    fn say(&mut self, message: &str);
}

/// Console backed by process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a new stdio console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> Result<String> {
        print!("{}", message);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        std::io::stdin().read_line(&mut line).context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}
