//! Terminal prompt backed by the rustyline line editor

use super::Prompt;
use crate::error::QuizError;
use anyhow::{Context as _, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Interactive prompt with line editing and optional history
pub struct LinePrompt {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl LinePrompt {
    /// Create a prompt, loading history from `history` when given
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up
    pub fn new(history: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().context("Failed to initialise the line editor")?;

        if let Some(path) = history.as_ref() {
            if let Some(parent) = path.parent() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    debug!("Cannot create history directory {}: {err}", parent.display());
                }
            }
            if let Err(err) = editor.load_history(path) {
                debug!("No history loaded from {}: {err}", path.display());
            }
        }

        Ok(Self { editor, history })
    }

    /// Default history location under the user data directory
    #[must_use]
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("quizcli").join("history.txt"))
    }

    fn read(&mut self, text: &str, initial: Option<&str>) -> Result<String, QuizError> {
        let result = match initial {
            Some(initial) => self.editor.readline_with_initial(text, (initial, "")),
            None => self.editor.readline(text),
        };

        match result {
            Ok(line) => {
                let line = line.trim().to_owned();
                if self.history.is_some() && !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(QuizError::Interrupted),
            Err(ReadlineError::Eof) => Err(QuizError::InputClosed),
            Err(err) => {
                warn!("Failed to read input: {err}");
                Err(QuizError::InputClosed)
            }
        }
    }
}

impl Prompt for LinePrompt {
    fn ask(&mut self, text: &str) -> Result<String, QuizError> {
        self.read(text, None)
    }

    fn ask_with_initial(&mut self, text: &str, initial: &str) -> Result<String, QuizError> {
        self.read(text, Some(initial))
    }
}

impl Drop for LinePrompt {
    fn drop(&mut self) {
        if let Some(path) = self.history.as_ref()
            && let Err(err) = self.editor.save_history(path)
        {
            warn!("Failed to save history to {}: {err}", path.display());
        }
    }
}
