//! In-memory quiz store

use crate::error::QuizError;
use crate::store::validation::{normalize_text, validate_quizzes};
use crate::store::{Quiz, QuizId, QuizStore, sample_quizzes};
use tracing::debug;

/// Quiz store backed by an ordered `Vec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    quizzes: Vec<Quiz>,
    /// `None` once every id up to `QuizId::MAX` has been handed out
    next_id: Option<QuizId>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            quizzes: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Create a store holding the sample quizzes
    #[must_use]
    pub fn seeded() -> Self {
        let quizzes: Vec<Quiz> = (1..)
            .zip(sample_quizzes())
            .map(|(id, (question, answer))| Quiz {
                id,
                question: question.to_owned(),
                answer: answer.to_owned(),
            })
            .collect();
        let next_id = quizzes.last().map_or(Some(1), |quiz| quiz.id.checked_add(1));
        Self { quizzes, next_id }
    }

    /// Build a store from existing records, keeping their ids
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Validation`] on duplicate ids or blank text
    pub fn from_quizzes(mut quizzes: Vec<Quiz>) -> Result<Self, QuizError> {
        validate_quizzes(&quizzes)?;
        for quiz in &mut quizzes {
            quiz.question = quiz.question.trim().to_owned();
            quiz.answer = quiz.answer.trim().to_owned();
        }
        quizzes.sort_by_key(|quiz| quiz.id);

        let next_id = quizzes.last().map_or(Some(1), |quiz| quiz.id.checked_add(1));
        Ok(Self { quizzes, next_id })
    }

    /// Number of stored quizzes
    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    /// Whether the store holds no quizzes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    fn push(&mut self, question: String, answer: String) -> Result<Quiz, QuizError> {
        let id = self
            .next_id
            .ok_or_else(|| QuizError::storage("no quiz ids left"))?;
        let quiz = Quiz {
            id,
            question,
            answer,
        };
        self.next_id = id.checked_add(1);
        self.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    fn position(&self, id: QuizId) -> Result<usize, QuizError> {
        self.quizzes
            .binary_search_by_key(&id, |quiz| quiz.id)
            .map_err(|_| QuizError::not_found(&id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStore for MemoryStore {
    fn get_all(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    fn get_by_id(&self, id: QuizId) -> Result<Quiz, QuizError> {
        let index = self.position(id)?;
        Ok(self.quizzes[index].clone())
    }

    fn add(&mut self, question: &str, answer: &str) -> Result<Quiz, QuizError> {
        let (question, answer) = normalize_text(question, answer)?;
        let quiz = self.push(question, answer)?;
        debug!("Added quiz {}", quiz.id);
        Ok(quiz)
    }

    fn update(&mut self, id: QuizId, question: &str, answer: &str) -> Result<Quiz, QuizError> {
        let index = self.position(id)?;
        let (question, answer) = normalize_text(question, answer)?;

        let quiz = &mut self.quizzes[index];
        quiz.question = question;
        quiz.answer = answer;
        debug!("Updated quiz {id}");
        Ok(quiz.clone())
    }

    fn delete_by_id(&mut self, id: QuizId) -> Result<Quiz, QuizError> {
        let index = self.position(id)?;
        debug!("Deleted quiz {id}");
        Ok(self.quizzes.remove(index))
    }
}
