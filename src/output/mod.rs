//! Output collaborator
//!
//! Everything the session shows the user goes through [`Output`]: plain
//! lines, error lines and "big" banner lines for results.

pub mod captured;
pub mod console;

pub use captured::{CapturedOutput, Line, LineKind};
pub use console::ConsoleOutput;

pub use colored::Color;

/// Sink for user-facing text
pub trait Output {
    /// Print a line, optionally colored
    fn log(&mut self, text: &str, color: Option<Color>);

    /// Print an error line
    fn errorlog(&mut self, text: &str);

    /// Print a prominent banner, optionally colored
    fn biglog(&mut self, text: &str, color: Option<Color>);
}
