//! Quiz storage module
//!
//! Defines the quiz record, the `QuizStore` trait every backend implements,
//! and the two backends: an in-memory list and a YAML file.

pub mod memory;
pub mod schema;
pub mod validation;
pub mod yaml;

pub use memory::MemoryStore;
pub use yaml::YamlStore;

use crate::error::QuizError;
use serde::{Deserialize, Serialize};

/// Stable quiz identifier
pub type QuizId = u32;

/// A question/answer pair with a stable id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
}

impl Quiz {
    /// Check an answer: trimmed and case-insensitive on both sides
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

/// CRUD collection of quizzes
///
/// Implementations keep records ordered by id and never hand out an id
/// twice. Lookups by an unknown id fail with [`QuizError::NotFound`].
pub trait QuizStore {
    /// All quizzes, ordered by id
    fn get_all(&self) -> Vec<Quiz>;

    /// The quiz stored under `id`
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotFound`] if no quiz has this id
    fn get_by_id(&self, id: QuizId) -> Result<Quiz, QuizError>;

    /// Append a new quiz with a freshly assigned id
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Validation`] on empty text, or
    /// [`QuizError::Storage`] if the backend cannot persist the change
    fn add(&mut self, question: &str, answer: &str) -> Result<Quiz, QuizError>;

    /// Replace question and answer of an existing quiz, keeping its id
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotFound`], [`QuizError::Validation`] or
    /// [`QuizError::Storage`]
    fn update(&mut self, id: QuizId, question: &str, answer: &str) -> Result<Quiz, QuizError>;

    /// Remove a quiz and return it
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotFound`] or [`QuizError::Storage`]
    fn delete_by_id(&mut self, id: QuizId) -> Result<Quiz, QuizError>;
}

/// Sample content for a fresh store
#[must_use]
pub fn sample_quizzes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Capital of Italy", "Rome"),
        ("Capital of France", "Paris"),
        ("Capital of Spain", "Madrid"),
        ("Capital of Portugal", "Lisbon"),
    ]
}
