//! Play loop: every quiz once, in random order, until the first miss

use crate::output::{Color, Output};
use crate::prompt::Prompt;
use crate::store::Quiz;
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every quiz was answered correctly
    Exhausted,
    /// A wrong answer ended the game
    Missed,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayReport {
    pub score: u32,
    pub outcome: PlayOutcome,
}

/// State of a game between two questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    /// Quizzes still to ask and the hits so far
    Asking { pool: Vec<Quiz>, score: u32 },
    /// The game is over
    Done(PlayReport),
}

impl PlayState {
    /// Start a game over a copy of `quizzes`
    #[must_use]
    pub const fn start(quizzes: Vec<Quiz>) -> Self {
        Self::Asking {
            pool: quizzes,
            score: 0,
        }
    }

    /// Current score
    #[must_use]
    pub const fn score(&self) -> u32 {
        match self {
            Self::Asking { score, .. } => *score,
            Self::Done(report) => report.score,
        }
    }

    /// Advance by one question
    ///
    /// An empty pool finishes the game as [`PlayOutcome::Exhausted`].
    /// Otherwise one quiz is drawn uniformly from the pool and removed; a
    /// right answer scores and keeps asking, a wrong one ends the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails
    pub fn step<R: Rng>(
        self,
        rng: &mut R,
        prompt: &mut dyn Prompt,
        out: &mut dyn Output,
    ) -> Result<Self> {
        let (mut pool, score) = match self {
            Self::Asking { pool, score } => (pool, score),
            done @ Self::Done(_) => return Ok(done),
        };

        if pool.is_empty() {
            out.log("Nothing left to ask.", None);
            return Ok(Self::Done(PlayReport {
                score,
                outcome: PlayOutcome::Exhausted,
            }));
        }

        let quiz = pool.remove(rng.gen_range(0..pool.len()));
        debug!("Asking quiz {} ({} left)", quiz.id, pool.len());

        let answer = prompt.ask(&question_prompt(&quiz.question))?;
        if quiz.is_correct(&answer) {
            let score = score + 1;
            out.log(&format!("CORRECT - {score} hits so far"), Some(Color::Green));
            Ok(Self::Asking { pool, score })
        } else {
            out.log("INCORRECT.", Some(Color::Red));
            Ok(Self::Done(PlayReport {
                score,
                outcome: PlayOutcome::Missed,
            }))
        }
    }
}

fn question_prompt(question: &str) -> String {
    if question.ends_with('?') {
        format!("{question} ")
    } else {
        format!("{question}? ")
    }
}

/// Play a full game and print the final score
///
/// The score is printed even when the prompt fails mid-game.
///
/// # Errors
///
/// Returns an error if the prompt fails before the game ends
pub fn play<R: Rng>(
    quizzes: Vec<Quiz>,
    rng: &mut R,
    prompt: &mut dyn Prompt,
    out: &mut dyn Output,
) -> Result<PlayReport> {
    let mut state = PlayState::start(quizzes);
    let report = loop {
        let score = state.score();
        state = match state.step(rng, prompt, out) {
            Ok(next) => next,
            Err(err) => {
                print_score(out, score);
                return Err(err);
            }
        };
        if let PlayState::Done(report) = state {
            break report;
        }
    };

    print_score(out, report.score);
    Ok(report)
}

fn print_score(out: &mut dyn Output, score: u32) {
    out.log("End of the game. Hits:", None);
    out.biglog(&score.to_string(), Some(Color::Magenta));
}
