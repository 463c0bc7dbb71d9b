//! Board model: write-once code and hint holes grouped into rounds.

pub mod types;

pub use types::{is_valid_symbol, CodePosition, HintPosition, HintState, Round, Symbol};
