//! Display and input for the game.
//!
//! The game core talks to the player only through [`Console`]; the terminal
//! implementation lives in [`terminal`].

pub mod palette;
pub mod terminal;

use crate::board::Round;
use crate::error::InputError;
use std::io;

pub use terminal::TerminalConsole;

/// The player-facing side of a game session.
pub trait Console {
    /// Greet the player and explain the rules.
    fn welcome(&mut self, rows: usize) -> io::Result<()>;

    /// Prompt for a guess and return its raw tokens, unvalidated.
    fn prompt_and_read_guess(&mut self) -> io::Result<Vec<String>>;

    /// Tell the player why their last input was rejected.
    fn report_invalid(&mut self, err: &InputError) -> io::Result<()>;

    /// Draw the board. Only completed rounds are shown.
    fn render_board(&mut self, rounds: &[Round]) -> io::Result<()>;

    fn announce_win(&mut self, rounds_used: usize) -> io::Result<()>;

    /// Announce the loss and reveal the secret code.
    fn announce_loss(&mut self, secret: &Round) -> io::Result<()>;
}
