//! Game session data structures.

use crate::board::{is_valid_symbol, Round, Symbol};
use crate::constants::CODE_LENGTH;
use crate::error::GameError;

/// Where a session stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Feedback counts for one scored round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Pegs matching colour and position
    pub exact: usize,
    /// Pegs matching colour only, after exact matches are taken out
    pub colour_only: usize,
}

impl Score {
    pub fn is_solved(&self) -> bool {
        self.exact == CODE_LENGTH
    }

    pub fn misses(&self) -> usize {
        CODE_LENGTH - self.exact - self.colour_only
    }
}

/// A full game: the player's rows, the hidden code, and the outcome so far.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) rounds: Vec<Round>,
    pub(super) secret: Round,
    pub(super) played: usize,
    pub(super) status: GameStatus,
}

impl GameSession {
    /// Creates a session with `rows` empty attempts and the given secret.
    pub fn new(rows: usize, secret: [Symbol; CODE_LENGTH]) -> Result<Self, GameError> {
        if rows == 0 {
            return Err(GameError::InvalidConfig(
                "a game needs at least one row".to_string(),
            ));
        }
        if let Some(bad) = secret.iter().find(|&&s| !is_valid_symbol(s)) {
            return Err(GameError::InvalidConfig(format!(
                "secret code symbol {} is not between 1 and 6",
                bad
            )));
        }
        log::debug!("new session with {} rows", rows);
        Ok(Self {
            rounds: vec![Round::new(); rows],
            secret: Round::with_code(&secret),
            played: 0,
            status: GameStatus::InProgress,
        })
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Rounds that have been scored so far.
    pub fn completed_rounds(&self) -> &[Round] {
        &self.rounds[..self.played]
    }

    pub fn secret(&self) -> &Round {
        &self.secret
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn rows(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds_played(&self) -> usize {
        self.played
    }

    pub fn rounds_remaining(&self) -> usize {
        self.rounds.len() - self.played
    }
}
