//! Error handling module
//!
//! Defines the quiz error taxonomy with exit codes

pub mod types;

pub use types::*;
