//! Play loop tests

use quizcli::operations::{PlayOutcome, PlayReport, PlayState, play};
use quizcli::output::{CapturedOutput, LineKind};
use quizcli::prompt::ScriptedPrompt;
use quizcli::store::{MemoryStore, Quiz, QuizStore};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Five quizzes that all share the answer "yes"
fn yes_quizzes() -> Vec<Quiz> {
    let mut store = MemoryStore::new();
    for n in 1..=5 {
        store.add(&format!("Is {n} a number"), "yes").unwrap();
    }
    store.get_all()
}

#[test]
fn all_correct_answers_exhaust_the_pool() {
    let mut prompt = ScriptedPrompt::new(["yes", "YES", " yes", "Yes ", "yes"]);
    let mut out = CapturedOutput::new();
    let mut rng = StdRng::seed_from_u64(3);

    let report = play(yes_quizzes(), &mut rng, &mut prompt, &mut out).unwrap();

    assert_eq!(
        report,
        PlayReport {
            score: 5,
            outcome: PlayOutcome::Exhausted
        }
    );
    assert!(out.contains("Nothing left to ask."));
    assert_eq!(out.texts(LineKind::Big), vec!["5"]);
}

#[test]
fn every_quiz_is_asked_exactly_once() {
    let quizzes = yes_quizzes();
    let mut prompt = ScriptedPrompt::new(vec!["yes"; quizzes.len()]);
    let mut out = CapturedOutput::new();
    let mut rng = StdRng::seed_from_u64(11);

    play(quizzes.clone(), &mut rng, &mut prompt, &mut out).unwrap();

    let asked: HashSet<&str> = prompt.asked().iter().map(String::as_str).collect();
    assert_eq!(asked.len(), quizzes.len());
    for quiz in &quizzes {
        assert!(asked.contains(format!("{}? ", quiz.question).as_str()));
    }
}

#[test]
fn first_wrong_answer_ends_the_game() {
    let mut prompt = ScriptedPrompt::new(["yes", "yes", "no", "yes", "yes"]);
    let mut out = CapturedOutput::new();
    let mut rng = StdRng::seed_from_u64(5);

    let report = play(yes_quizzes(), &mut rng, &mut prompt, &mut out).unwrap();

    assert_eq!(
        report,
        PlayReport {
            score: 2,
            outcome: PlayOutcome::Missed
        }
    );
    assert_eq!(prompt.remaining(), 2);
    assert!(out.contains("INCORRECT."));
    assert!(out.contains("CORRECT - 2 hits so far"));
    assert!(!out.contains("CORRECT - 3 hits so far"));
}

#[test]
fn score_never_decreases_between_steps() {
    let mut prompt = ScriptedPrompt::new(["yes", "yes", "yes", "nope", "yes"]);
    let mut out = CapturedOutput::new();
    let mut rng = StdRng::seed_from_u64(9);

    let mut state = PlayState::start(yes_quizzes());
    let mut scores = vec![state.score()];
    while let PlayState::Asking { .. } = state {
        state = state.step(&mut rng, &mut prompt, &mut out).unwrap();
        scores.push(state.score());
    }

    assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(scores.last().copied(), Some(3));
}

#[test]
fn closed_input_aborts_the_game() {
    let mut prompt = ScriptedPrompt::new(["yes"]);
    let mut out = CapturedOutput::new();
    let mut rng = StdRng::seed_from_u64(1);

    let err = play(yes_quizzes(), &mut rng, &mut prompt, &mut out).unwrap_err();
    assert_eq!(
        err.downcast_ref::<quizcli::error::QuizError>(),
        Some(&quizcli::error::QuizError::InputClosed)
    );
}

#[test]
fn cancelled_game_still_prints_the_score() {
    let mut prompt = ScriptedPrompt::new(["yes", "yes"]);
    prompt.push_interrupt();
    let mut out = CapturedOutput::new();
    let mut rng = StdRng::seed_from_u64(4);

    let err = play(yes_quizzes(), &mut rng, &mut prompt, &mut out).unwrap_err();

    assert_eq!(
        err.downcast_ref::<quizcli::error::QuizError>(),
        Some(&quizcli::error::QuizError::Interrupted)
    );
    assert!(out.contains("End of the game. Hits:"));
    assert_eq!(out.texts(LineKind::Big), vec!["2"]);
}

#[test]
fn same_seed_asks_in_same_order() {
    let run = |seed| {
        let mut prompt = ScriptedPrompt::new(vec!["yes"; 5]);
        let mut out = CapturedOutput::new();
        let mut rng = StdRng::seed_from_u64(seed);
        play(yes_quizzes(), &mut rng, &mut prompt, &mut out).unwrap();
        prompt.asked().to_vec()
    };

    assert_eq!(run(21), run(21));
}
