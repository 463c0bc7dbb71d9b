//! Mastermind - Terminal Code-Breaking Game Library
//!
//! This module exposes the board model, scoring and session logic for testing
//! and for alternative front ends.

pub mod board;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use board::{CodePosition, HintPosition, HintState, Round, Symbol};
pub use config::{GameConfig, SecretSource};
pub use error::{ConfigError, GameError, InputError};
pub use game::{GameSession, GameStatus, Score};
pub use ui::{Console, TerminalConsole};
