//! `quizcli` - An interactive command-line quiz trainer
//!
//! This library stores question/answer pairs behind a swappable store,
//! lets the user list, add, edit, delete and test them from a prompt, and
//! plays all of them in random order until the first wrong answer.

pub mod cli;
pub mod error;
pub mod operations;
pub mod output;
pub mod prompt;
pub mod session;
pub mod store;
pub mod system;

use anyhow::Result;
use cli::Args;
use output::{Color, ConsoleOutput, Output as _};
use prompt::LinePrompt;
use session::Session;
use std::io::IsTerminal as _;
use store::{MemoryStore, QuizStore, YamlStore};
use system::RealSystem;
use tracing::info;

/// Main entry point for the quizcli library
///
/// # Errors
///
/// Returns an error if the store file cannot be opened or the terminal
/// cannot be set up
pub fn run(args: &Args) -> Result<()> {
    if args.no_color {
        ConsoleOutput::set_colors(false);
    }

    let system = RealSystem::new();
    let mut store: Box<dyn QuizStore + '_> = match args.store.as_ref() {
        Some(path) => {
            info!("Using store file {}", path.display());
            Box::new(YamlStore::open(&system, path.clone(), !args.empty)?)
        }
        None if args.empty => Box::new(MemoryStore::new()),
        None => Box::new(MemoryStore::seeded()),
    };

    let history = if std::io::stdin().is_terminal() {
        LinePrompt::default_history_path()
    } else {
        None
    };
    let mut prompt = LinePrompt::new(history)?;
    let mut out = ConsoleOutput::new();

    out.biglog("Quiz CLI", Some(Color::Green));
    out.log("Type 'help' to list the available commands.", None);

    let mut session = Session::new(store.as_mut(), &mut prompt, &mut out, rand::thread_rng());
    session.run();

    Ok(())
}
