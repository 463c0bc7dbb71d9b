// Board geometry
pub const CODE_LENGTH: usize = 4;
pub const DEFAULT_ROWS: usize = 5;
pub const MAX_ROWS: usize = 20;

// Symbol range (0 is the "unset" sentinel)
pub const UNSET_SYMBOL: u8 = 0;
pub const MIN_SYMBOL: u8 = 1;
pub const MAX_SYMBOL: u8 = 6;

// Config file name inside ~/.mastermind/
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Colour names for symbols 1..=6, indexed by `symbol - 1`.
pub const COLOUR_NAMES: [&str; MAX_SYMBOL as usize] =
    ["red", "yellow", "blue", "green", "purple", "white"];

/// Human-readable colour name for a symbol, or `None` for the sentinel or
/// anything out of range.
pub fn colour_name(symbol: u8) -> Option<&'static str> {
    if (MIN_SYMBOL..=MAX_SYMBOL).contains(&symbol) {
        Some(COLOUR_NAMES[(symbol - MIN_SYMBOL) as usize])
    } else {
        None
    }
}
