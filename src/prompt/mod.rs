//! Prompt/question service
//!
//! Asks the user one free-text question at a time and hands back the
//! trimmed answer. The session only sees the [`Prompt`] trait; the terminal
//! line editor and the scripted test double sit behind it.

pub mod line;
pub mod scripted;

pub use line::LinePrompt;
pub use scripted::ScriptedPrompt;

use crate::error::QuizError;

/// Source of user answers
pub trait Prompt {
    /// Ask `text` and block until the user answers
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InputClosed`] at end of input and
    /// [`QuizError::Interrupted`] when the user cancels the prompt
    fn ask(&mut self, text: &str) -> Result<String, QuizError>;

    /// Ask `text` with the input line pre-filled with `initial`
    ///
    /// Backends that cannot pre-fill a line fall back to [`Prompt::ask`].
    ///
    /// # Errors
    ///
    /// Same as [`Prompt::ask`]
    fn ask_with_initial(&mut self, text: &str, _initial: &str) -> Result<String, QuizError> {
        self.ask(text)
    }
}
