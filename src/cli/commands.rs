//! Interactive command parsing

use crate::error::QuizError;
use crate::store::QuizId;
use std::num::{IntErrorKind, ParseIntError};

/// One line typed at the quiz prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show(QuizId),
    Add,
    Delete(QuizId),
    Edit(QuizId),
    Test(QuizId),
    Play,
    Credits,
    Quit,
}

impl Command {
    /// Parse a command line: a case-insensitive command word and an optional id
    ///
    /// Blank lines parse to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command word is unknown
    /// - A command that needs an id has none, or the id is not a number
    pub fn parse(line: &str) -> Result<Option<Self>, QuizError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match word.to_lowercase().as_str() {
            "h" | "help" => Self::Help,
            "list" => Self::List,
            "show" => Self::Show(validate_id(arg)?),
            "add" => Self::Add,
            "delete" => Self::Delete(validate_id(arg)?),
            "edit" => Self::Edit(validate_id(arg)?),
            "test" => Self::Test(validate_id(arg)?),
            "p" | "play" => Self::Play,
            "credits" => Self::Credits,
            "q" | "quit" => Self::Quit,
            _ => return Err(QuizError::unknown_command(word)),
        };

        Ok(Some(command))
    }

    /// Whether the command asks the user for more input
    #[must_use]
    pub const fn awaits_input(&self) -> bool {
        matches!(self, Self::Add | Self::Edit(_) | Self::Test(_) | Self::Play)
    }
}

/// Check the id argument of a command
///
/// # Errors
///
/// Returns an error if:
/// - `arg` is absent (`MissingParameter`)
/// - `arg` is not an integer (`NotANumber`)
/// - `arg` is an integer no quiz can have (`NotFound`)
pub fn validate_id(arg: Option<&str>) -> Result<QuizId, QuizError> {
    let arg = arg.map(str::trim).ok_or(QuizError::MissingParameter)?;
    if arg.is_empty() {
        return Err(QuizError::MissingParameter);
    }

    let value: i64 = arg.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => QuizError::not_found(arg),
        _ => QuizError::not_a_number(arg),
    })?;
    QuizId::try_from(value).map_err(|_| QuizError::not_found(&value))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(Command::parse("LIST").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("Show 3").unwrap(), Some(Command::Show(3)));
        assert_eq!(Command::parse("  q ").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("P").unwrap(), Some(Command::Play));
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn missing_id_is_reported() {
        assert_eq!(
            Command::parse("delete").unwrap_err(),
            QuizError::MissingParameter
        );
    }

    #[test]
    fn non_numeric_id_is_reported() {
        assert_eq!(
            Command::parse("edit abc").unwrap_err(),
            QuizError::not_a_number("abc")
        );
    }

    #[test]
    fn negative_id_is_not_found() {
        assert_eq!(validate_id(Some("-1")).unwrap_err(), QuizError::not_found("-1"));
    }

    #[test]
    fn oversized_id_is_not_found() {
        assert_eq!(
            validate_id(Some("4294967296")).unwrap_err(),
            QuizError::not_found("4294967296")
        );
        assert_eq!(
            validate_id(Some("99999999999999999999")).unwrap_err(),
            QuizError::not_found("99999999999999999999")
        );
        assert_eq!(
            validate_id(Some("-99999999999999999999")).unwrap_err(),
            QuizError::not_found("-99999999999999999999")
        );
        assert_eq!(
            validate_id(Some("12abc")).unwrap_err(),
            QuizError::not_a_number("12abc")
        );
    }

    #[test]
    fn unknown_word_is_reported() {
        let err = Command::parse("fly 3").unwrap_err();
        assert_eq!(err, QuizError::unknown_command("fly"));
    }

    #[test]
    fn interactive_commands_await_input() {
        assert!(Command::Add.awaits_input());
        assert!(Command::Test(1).awaits_input());
        assert!(!Command::List.awaits_input());
    }
}
