//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the note content itself)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print the note content with the selection highlighted
    pub fn note(&self, before: &str, selected: &str, after: &str) {
        if selected.is_empty() {
            println!("{}{}{}", before, "|".dimmed(), after);
        } else {
            println!("{}{}{}", before, selected.reversed(), after);
        }
    }

    /// Print a per-kind rewrite status line
    pub fn rewrite_status(&self, kind: &str, status: &str) {
        eprintln!("{} {}: {}", "●".cyan(), kind, status);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
