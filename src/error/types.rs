//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for quizcli operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    /// A command that needs an id was given none
    #[error("Missing parameter id.")]
    MissingParameter,

    /// The id argument is not an integer
    #[error("The value of the parameter id is not a number: '{value}'.")]
    NotANumber { value: String },

    /// No quiz is stored under the requested id
    #[error("There is no quiz associated with id={id}.")]
    NotFound { id: String },

    /// Question or answer text is not acceptable
    #[error("Invalid quiz: {message}")]
    Validation { message: String },

    /// The command word is not in the dispatch table
    #[error("Unknown command: '{command}'. Use 'help' to list the available commands.")]
    UnknownCommand { command: String },

    /// Store backend failure (read, parse, schema or write)
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// The input stream was closed (Ctrl-D or end of stdin)
    #[error("Input closed.")]
    InputClosed,

    /// The user interrupted a prompt (Ctrl-C)
    #[error("Command cancelled.")]
    Interrupted,
}

impl QuizError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::MissingParameter
            | Self::NotANumber { .. }
            | Self::NotFound { .. }
            | Self::Validation { .. }
            | Self::UnknownCommand { .. } => 1,
            Self::Storage { .. } => 2,
            Self::InputClosed | Self::Interrupted => 3,
        }
    }

    /// Create a not-a-number error
    #[inline]
    pub fn not_a_number<S: Into<String>>(value: S) -> Self {
        Self::NotANumber {
            value: value.into(),
        }
    }

    /// Create a not-found error
    #[inline]
    pub fn not_found<S: ToString + ?Sized>(id: &S) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unknown-command error
    #[inline]
    pub fn unknown_command<S: Into<String>>(command: S) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Create a storage error
    #[inline]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_single_user_facing_lines() {
        assert_eq!(QuizError::MissingParameter.to_string(), "Missing parameter id.");
        assert_eq!(
            QuizError::not_found(&99).to_string(),
            "There is no quiz associated with id=99."
        );
        assert!(QuizError::not_a_number("abc").to_string().contains("'abc'"));
    }

    #[test]
    fn storage_errors_have_their_own_exit_code() {
        assert_eq!(QuizError::storage("boom").exit_code(), 2);
        assert_eq!(QuizError::MissingParameter.exit_code(), 1);
    }
}
