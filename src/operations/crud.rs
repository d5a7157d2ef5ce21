//! Listing and editing the stored quizzes

use crate::output::Output;
use crate::prompt::Prompt;
use crate::store::{Quiz, QuizId, QuizStore};
use anyhow::Result;
use colored::Colorize;

const QUESTION_PROMPT: &str = " Enter a question: ";
const ANSWER_PROMPT: &str = " Enter the answer: ";

/// ` [id]: question`
#[must_use]
pub fn format_entry(quiz: &Quiz) -> String {
    format!(" [{}]: {}", quiz.id.to_string().magenta(), quiz.question)
}

/// ` [id]: question => answer`
#[must_use]
pub fn format_full(quiz: &Quiz) -> String {
    format!("{} {} {}", format_entry(quiz), "=>".magenta(), quiz.answer)
}

/// Print every quiz as ` [id]: question`
pub fn list(store: &dyn QuizStore, out: &mut dyn Output) {
    for quiz in store.get_all() {
        out.log(&format_entry(&quiz), None);
    }
}

/// Print one quiz with its answer
///
/// # Errors
///
/// Returns an error if no quiz has this id
pub fn show(store: &dyn QuizStore, out: &mut dyn Output, id: QuizId) -> Result<()> {
    let quiz = store.get_by_id(id)?;
    out.log(&format_full(&quiz), None);
    Ok(())
}

/// Ask for a question and its answer, then store them
///
/// # Errors
///
/// Returns an error if input ends, the text is empty, or the store fails
pub fn add(store: &mut dyn QuizStore, prompt: &mut dyn Prompt, out: &mut dyn Output) -> Result<()> {
    let question = prompt.ask(QUESTION_PROMPT)?;
    let answer = prompt.ask(ANSWER_PROMPT)?;

    let quiz = store.add(&question, &answer)?;
    out.log(
        &format!(
            "{}: {} {} {}",
            "Added".magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        ),
        None,
    );
    Ok(())
}

/// Remove a quiz
///
/// # Errors
///
/// Returns an error if no quiz has this id or the store fails
pub fn delete(store: &mut dyn QuizStore, out: &mut dyn Output, id: QuizId) -> Result<()> {
    let quiz = store.delete_by_id(id)?;
    out.log(&format!("Deleted{}", format_entry(&quiz)), None);
    Ok(())
}

/// Replace question and answer of a quiz, offering the current text for editing
///
/// # Errors
///
/// Returns an error if no quiz has this id, input ends, the text is empty,
/// or the store fails
pub fn edit(
    store: &mut dyn QuizStore,
    prompt: &mut dyn Prompt,
    out: &mut dyn Output,
    id: QuizId,
) -> Result<()> {
    let current = store.get_by_id(id)?;

    let question = prompt.ask_with_initial(QUESTION_PROMPT, &current.question)?;
    let answer = prompt.ask_with_initial(ANSWER_PROMPT, &current.answer)?;

    let quiz = store.update(id, &question, &answer)?;
    out.log(
        &format!(
            " Quiz {} changed to: {} {} {}",
            quiz.id.to_string().magenta(),
            quiz.question,
            "=>".magenta(),
            quiz.answer
        ),
        None,
    );
    Ok(())
}
