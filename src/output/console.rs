//! Console output with ANSI colors

use super::{Color, Output};
use colored::Colorize;

/// Writes to stdout, errors to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a console output
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Enable or disable colors for the whole process
    pub fn set_colors(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Render `text` inside a rounded box
    #[must_use]
    pub fn banner(text: &str) -> String {
        let width = text.chars().count() + 2;
        let rule = "─".repeat(width);
        format!("╭{rule}╮\n│ {text} │\n╰{rule}╯")
    }
}

impl Output for ConsoleOutput {
    fn log(&mut self, text: &str, color: Option<Color>) {
        match color {
            Some(color) => println!("{}", text.color(color)),
            None => println!("{text}"),
        }
    }

    fn errorlog(&mut self, text: &str) {
        eprintln!("{} {}", "Error:".red().bold(), text.red());
    }

    fn biglog(&mut self, text: &str, color: Option<Color>) {
        let banner = Self::banner(text);
        match color {
            Some(color) => println!("{}", banner.as_str().color(color).bold()),
            None => println!("{}", banner.as_str().bold()),
        }
    }
}
