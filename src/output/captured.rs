//! Capturing output for tests

use super::{Color, Output};

/// Which collaborator call produced a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Log,
    Error,
    Big,
}

/// One captured line
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
    pub color: Option<Color>,
}

/// Records everything written to it instead of printing
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    lines: Vec<Line>,
}

impl CapturedOutput {
    /// Create an empty capture
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Texts of the captured lines of one kind
    #[must_use]
    pub fn texts(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.text.as_str())
            .collect()
    }

    /// Texts of the error lines
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.texts(LineKind::Error)
    }

    /// Whether any line contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }

    /// Drop everything captured so far
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn push(&mut self, kind: LineKind, text: &str, color: Option<Color>) {
        self.lines.push(Line {
            kind,
            text: text.to_owned(),
            color,
        });
    }
}

impl Output for CapturedOutput {
    fn log(&mut self, text: &str, color: Option<Color>) {
        self.push(LineKind::Log, text, color);
    }

    fn errorlog(&mut self, text: &str) {
        self.push(LineKind::Error, text, None);
    }

    fn biglog(&mut self, text: &str, color: Option<Color>) {
        self.push(LineKind::Big, text, color);
    }
}
