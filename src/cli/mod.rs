//! Command-line interface module
//!
//! Handles process arguments and the commands typed at the quiz prompt

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
