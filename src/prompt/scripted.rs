//! Scripted prompt for tests and non-interactive drivers

use super::Prompt;
use crate::error::QuizError;
use std::collections::VecDeque;

/// Replays a fixed queue of answers
///
/// Every prompt text it is asked is recorded, so tests can check what the
/// user would have seen. Once the queue is empty it reports end of input.
/// A Ctrl-C can be queued between answers with [`ScriptedPrompt::push_interrupt`].
///
/// # Example
/// ```
/// use quizcli::error::QuizError;
/// use quizcli::prompt::{Prompt, ScriptedPrompt};
///
/// let mut prompt = ScriptedPrompt::new(["  4  "]);
/// assert_eq!(prompt.ask("2+2? ").unwrap(), "4");
/// assert!(prompt.ask("again? ").is_err());
/// assert_eq!(prompt.asked(), ["2+2? ", "again? "]);
///
/// prompt.push_interrupt();
/// assert_eq!(prompt.ask("3+3? "), Err(QuizError::Interrupted));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Result<String, QuizError>>,
    asked: Vec<String>,
    prefills: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that answers with `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers
                .into_iter()
                .map(|answer| Ok(answer.into()))
                .collect(),
            asked: Vec::new(),
            prefills: Vec::new(),
        }
    }

    /// Queue one more answer
    pub fn push<S: Into<String>>(&mut self, answer: S) {
        self.answers.push_back(Ok(answer.into()));
    }

    /// Queue a Ctrl-C: the next prompt fails with [`QuizError::Interrupted`]
    pub fn push_interrupt(&mut self) {
        self.answers.push_back(Err(QuizError::Interrupted));
    }

    /// Prompt texts asked so far, in order
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Initial line contents offered so far, in order
    #[must_use]
    pub fn prefills(&self) -> &[String] {
        &self.prefills
    }

    /// Answers and interrupts not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, text: &str) -> Result<String, QuizError> {
        self.asked.push(text.to_owned());
        self.answers
            .pop_front()
            .unwrap_or(Err(QuizError::InputClosed))
            .map(|answer| answer.trim().to_owned())
    }

    fn ask_with_initial(&mut self, text: &str, initial: &str) -> Result<String, QuizError> {
        self.prefills.push(initial.to_owned());
        self.ask(text)
    }
}
