//! Terminal styling helpers for CLI output
//!
//! Thin wrappers over owo-colors that degrade to plain text when the
//! stream is not a color-capable terminal.

use owo_colors::{OwoColorize, Stream};

/// Extension trait for the handful of styles used in command output
pub trait Stylize {
    /// De-emphasized secondary text
    fn muted(&self) -> String;
    /// Emphasized primary text (PR numbers, branch names)
    fn emphasis(&self) -> String;
    /// Accented values (labels, counts)
    fn accent(&self) -> String;
    /// Success-colored text
    fn success(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.dimmed())
            .to_string()
    }

    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.bold())
            .to_string()
    }

    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.cyan())
            .to_string()
    }

    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.green())
            .to_string()
    }
}

/// Green check mark for completed actions
pub fn check() -> String {
    "✓".success()
}

/// Red label prefixing fatal error output on stderr
pub fn error_label() -> String {
    "error:"
        .if_supports_color(Stream::Stderr, |text| text.red())
        .to_string()
}
