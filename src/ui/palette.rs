//! Stateless peg formatting for terminal output.

use crate::board::{HintState, Symbol};
use crossterm::style::{Color, Stylize};

/// Background colour for each code symbol.
fn symbol_background(symbol: Symbol) -> Option<Color> {
    match symbol {
        1 => Some(Color::DarkRed),
        2 => Some(Color::DarkYellow),
        3 => Some(Color::DarkBlue),
        4 => Some(Color::DarkGreen),
        5 => Some(Color::DarkMagenta),
        6 => Some(Color::Grey),
        _ => None,
    }
}

/// A code peg, e.g. ` 3 ` on blue. Unset holes render as ` . `.
/// Without colour, pegs render as `[3]`.
pub fn code_peg(symbol: Symbol, color: bool) -> String {
    match (symbol_background(symbol), color) {
        (Some(bg), true) => format!(" {} ", symbol).with(Color::Black).on(bg).to_string(),
        (Some(_), false) => format!("[{}]", symbol),
        (None, true) => " . ".dark_grey().to_string(),
        (None, false) => "[ ]".to_string(),
    }
}

fn hint_symbol(state: HintState) -> &'static str {
    match state {
        HintState::Exact => "\u{25CF}",
        HintState::ColourOnly => "\u{25CB}",
        HintState::None => "\u{00B7}",
    }
}

/// A hint peg: filled for exact, hollow for colour-only, a dot for no match.
pub fn hint_peg(state: HintState, color: bool) -> String {
    let sym = hint_symbol(state);
    if !color {
        return sym.to_string();
    }
    match state {
        HintState::Exact => sym.green().bold().to_string(),
        HintState::ColourOnly => sym.white().to_string(),
        HintState::None => sym.dark_grey().to_string(),
    }
}

/// The colour key shown with every prompt: each symbol on its own colour.
pub fn legend(color: bool) -> String {
    (crate::constants::MIN_SYMBOL..=crate::constants::MAX_SYMBOL)
        .map(|s| code_peg(s, color))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_code_peg() {
        assert_eq!(code_peg(3, false), "[3]");
        assert_eq!(code_peg(0, false), "[ ]");
    }

    #[test]
    fn test_colored_code_peg_keeps_symbol() {
        for symbol in 1..=6 {
            assert!(code_peg(symbol, true).contains(&format!(" {} ", symbol)));
        }
    }

    #[test]
    fn test_plain_hint_peg() {
        assert_eq!(hint_peg(HintState::Exact, false), "\u{25CF}");
        assert_eq!(hint_peg(HintState::ColourOnly, false), "\u{25CB}");
        assert_eq!(hint_peg(HintState::None, false), "\u{00B7}");
    }

    #[test]
    fn test_colored_hint_peg_contains_symbol() {
        for state in [HintState::Exact, HintState::ColourOnly, HintState::None] {
            let peg = hint_peg(state, true);
            assert!(peg.contains(hint_symbol(state)));
        }
    }

    #[test]
    fn test_colour_only_hint_is_white() {
        assert_eq!(
            hint_peg(HintState::ColourOnly, true),
            "\u{25CB}".white().to_string()
        );
    }

    #[test]
    fn test_plain_legend() {
        assert_eq!(legend(false), "[1] [2] [3] [4] [5] [6]");
    }
}
