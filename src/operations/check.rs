//! Testing a single quiz

use crate::operations::crud::format_entry;
use crate::output::{Color, Output};
use crate::prompt::Prompt;
use crate::store::{QuizId, QuizStore};
use anyhow::Result;

/// Ask one quiz and tell the user whether the answer was right
///
/// Returns whether the answer was correct.
///
/// # Errors
///
/// Returns an error if no quiz has this id or input ends
pub fn test_quiz(
    store: &dyn QuizStore,
    prompt: &mut dyn Prompt,
    out: &mut dyn Output,
    id: QuizId,
) -> Result<bool> {
    let quiz = store.get_by_id(id)?;
    out.log(&format_entry(&quiz), None);

    let answer = prompt.ask(" Your answer: ")?;
    let correct = quiz.is_correct(&answer);
    if correct {
        out.log("Your answer is correct.", None);
        out.biglog("Correct", Some(Color::Green));
    } else {
        out.log("Your answer is incorrect.", None);
        out.biglog("Incorrect", Some(Color::Red));
    }

    Ok(correct)
}
