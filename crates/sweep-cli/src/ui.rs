//! Console output.

use std::fmt::Display;
use std::io::IsTerminal;

use crossterm::style::Stylize;
use sweep_core::Reporter;

/// Writes sweep progress to stdout and warnings to stderr.
///
/// Prefixes are colored only when the target stream is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color_out: bool,
    color_err: bool,
}

impl ConsoleReporter {
    /// Reporter for the current process streams.
    pub fn new() -> Self {
        Self {
            color_out: std::io::stdout().is_terminal(),
            color_err: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn prefixed(prefix: &impl Display, msg: &str) -> String {
    format!("{prefix} {msg}")
}

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        println!("{msg}");
    }

    fn warning(&self, msg: &str) {
        let line = if self.color_err {
            prefixed(&"warning:".yellow().bold(), msg)
        } else {
            prefixed(&"warning:", msg)
        };
        eprintln!("{line}");
    }

    fn success(&self, msg: &str) {
        let line = if self.color_out {
            msg.green().to_string()
        } else {
            msg.to_string()
        };
        println!("{line}");
    }
}
