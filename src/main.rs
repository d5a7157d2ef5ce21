//! # `quizcli`
//!
//! `quizcli` is an interactive command-line quiz trainer. It keeps a list of
//! question/answer pairs, lets you manage them from a prompt, and plays them
//! all in random order until the first wrong answer.
//!
//! ## Usage
//!
//! ```sh
//! quizcli                          # in-memory store with sample quizzes
//! quizcli --store quizzes.yaml     # keep quizzes in a YAML file
//! ```
//!
//! Type `help` at the `quiz >` prompt for the list of commands.

use anyhow::Result;
use clap::Parser as _;
use quizcli::cli::Args;
use quizcli::error::QuizError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiz output owns stdout; logs stay on stderr and quiet by default
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match quizcli::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<QuizError>()
                    .map_or(1, QuizError::exit_code),
            );
        }
    }
}
