//! Player input parsing.
//!
//! A guess line has all whitespace removed and every remaining character
//! becomes one token, so `1526`, `1 5 2 6` and ` 15 26 ` read the same.

use crate::board::{is_valid_symbol, Symbol};
use crate::constants::CODE_LENGTH;
use crate::error::InputError;

/// Splits a raw input line into single-character tokens, ignoring whitespace.
pub fn tokenize(line: &str) -> Vec<String> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string())
        .collect()
}

/// Parses one token into a symbol.
pub fn parse_symbol(token: &str) -> Result<Symbol, InputError> {
    let value: i64 = token
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;
    match Symbol::try_from(value) {
        Ok(symbol) if is_valid_symbol(symbol) => Ok(symbol),
        _ => Err(InputError::OutOfRange(value)),
    }
}

/// Validates a tokenized guess: exactly four tokens, each a colour in 1..=6.
/// The length is checked first, then tokens in order; the first problem wins.
pub fn parse_guess<S: AsRef<str>>(tokens: &[S]) -> Result<[Symbol; CODE_LENGTH], InputError> {
    if tokens.len() != CODE_LENGTH {
        return Err(InputError::wrong_length(tokens.len()));
    }
    let mut code = [0; CODE_LENGTH];
    for (slot, token) in code.iter_mut().zip(tokens) {
        *slot = parse_symbol(token.as_ref())?;
    }
    Ok(code)
}

/// Boolean form of [`parse_guess`].
pub fn is_valid_guess<S: AsRef<str>>(tokens: &[S]) -> bool {
    parse_guess(tokens).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_whitespace() {
        assert_eq!(tokenize("1526"), vec!["1", "5", "2", "6"]);
        assert_eq!(tokenize("1 5 2 6"), vec!["1", "5", "2", "6"]);
        assert_eq!(tokenize(" 15\t26 \n"), vec!["1", "5", "2", "6"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_valid_guess() {
        assert_eq!(parse_guess(&["1", "2", "3", "4"]), Ok([1, 2, 3, 4]));
        assert!(is_valid_guess(&["6", "6", "1", "1"]));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            parse_guess(&["1", "2", "3"]),
            Err(InputError::WrongLength {
                expected: 4,
                found: 3
            })
        );
        assert!(!is_valid_guess(&["1", "2", "3", "4", "5"]));
        assert!(!is_valid_guess::<&str>(&[]));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_guess(&["1", "2", "3", "7"]),
            Err(InputError::OutOfRange(7))
        );
        assert_eq!(
            parse_guess(&["0", "2", "3", "4"]),
            Err(InputError::OutOfRange(0))
        );
        assert_eq!(
            parse_guess(&["-1", "2", "3", "4"]),
            Err(InputError::OutOfRange(-1))
        );
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            parse_guess(&["a", "2", "3", "4"]),
            Err(InputError::NotANumber("a".to_string()))
        );
    }

    #[test]
    fn test_length_checked_before_tokens() {
        assert_eq!(
            parse_guess(&["a", "b"]),
            Err(InputError::WrongLength {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn test_first_bad_token_reported() {
        assert_eq!(
            parse_guess(&["1", "x", "9", "4"]),
            Err(InputError::NotANumber("x".to_string()))
        );
    }

    #[test]
    fn test_tokenize_then_parse() {
        assert_eq!(parse_guess(&tokenize("1 5 2 6")), Ok([1, 5, 2, 6]));
        assert!(parse_guess(&tokenize("12345")).is_err());
        assert!(parse_guess(&tokenize("12a4")).is_err());
    }
}
