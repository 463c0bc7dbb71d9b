//! Game session: rows of guesses scored against a hidden code.

pub mod logic;
pub mod types;

pub use logic::{exact_matches, generate_code, hint_row, score, tally_colour_matches};
pub use types::{GameSession, GameStatus, Score};
