//! Quiz content validation logic

use crate::error::QuizError;
use crate::store::Quiz;
use std::collections::HashSet;

/// Trim question and answer, rejecting empty text
///
/// # Errors
///
/// Returns [`QuizError::Validation`] if either part is blank
#[inline]
pub fn normalize_text(question: &str, answer: &str) -> Result<(String, String), QuizError> {
    let question = question.trim();
    let answer = answer.trim();

    if question.is_empty() {
        return Err(QuizError::validation("the question cannot be empty"));
    }
    if answer.is_empty() {
        return Err(QuizError::validation("the answer cannot be empty"));
    }

    Ok((question.to_owned(), answer.to_owned()))
}

/// Validate a loaded list of quizzes
///
/// # Errors
///
/// Returns an error if:
/// - An id is zero or appears twice
/// - A question or answer is blank
#[inline]
pub fn validate_quizzes(quizzes: &[Quiz]) -> Result<(), QuizError> {
    let mut seen = HashSet::new();

    for (index, quiz) in quizzes.iter().enumerate() {
        let context = format!("Quiz #{}", index + 1);

        if quiz.id == 0 {
            return Err(QuizError::validation(format!(
                "{context}: ids start at 1"
            )));
        }
        if !seen.insert(quiz.id) {
            return Err(QuizError::validation(format!(
                "{context}: duplicate id {}",
                quiz.id
            )));
        }
        normalize_text(&quiz.question, &quiz.answer).map_err(|e| {
            return QuizError::validation(format!("{context} (id={}): {e}", quiz.id));
        })?;
    }

    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    fn quiz(id: u32, question: &str, answer: &str) -> Quiz {
        Quiz {
            id,
            question: question.to_owned(),
            answer: answer.to_owned(),
        }
    }

    #[test]
    fn normalize_trims_both_parts() {
        let (q, a) = normalize_text("  2+2?  ", " 4 ").unwrap();
        assert_eq!(q, "2+2?");
        assert_eq!(a, "4");
    }

    #[test]
    fn blank_answer_is_rejected() {
        let err = normalize_text("2+2?", "   ").unwrap_err();
        assert!(matches!(err, QuizError::Validation { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let quizzes = vec![quiz(1, "a", "b"), quiz(1, "c", "d")];
        let err = validate_quizzes(&quizzes).unwrap_err();
        assert!(err.to_string().contains("duplicate id 1"));
    }

    #[test]
    fn zero_id_is_rejected() {
        assert!(validate_quizzes(&[quiz(0, "a", "b")]).is_err());
    }
}
