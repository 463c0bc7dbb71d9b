use std::path::PathBuf;

use crate::constants::CODE_LENGTH;

/// Why a line of player input was not accepted as a guess.
///
/// Always recoverable: the player is told and asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected {expected} numbers, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not between 1 and 6")]
    OutOfRange(i64),
}

impl InputError {
    pub fn wrong_length(found: usize) -> Self {
        InputError::WrongLength {
            expected: CODE_LENGTH,
            found,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end a game session early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid game setup: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        assert_eq!(
            InputError::wrong_length(3).to_string(),
            "expected 4 numbers, got 3"
        );
        assert_eq!(
            InputError::NotANumber("a".to_string()).to_string(),
            "'a' is not a number"
        );
        assert_eq!(
            InputError::OutOfRange(7).to_string(),
            "7 is not between 1 and 6"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be > 0");
    }

    #[test]
    fn test_game_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: input closed");
    }
}
