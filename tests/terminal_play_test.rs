//! Integration test: playing through the terminal console
//!
//! Feeds whole input lines through `TerminalConsole` over in-memory buffers
//! and checks what the player would see.

use std::io::Cursor;

use mastermind::{GameConfig, GameError, GameSession, GameStatus, SecretSource, TerminalConsole};

fn play(secret: [u8; 4], rows: usize, input: &str) -> (Result<GameStatus, GameError>, String) {
    play_bytes(secret, rows, input.as_bytes())
}

fn play_bytes(
    secret: [u8; 4],
    rows: usize,
    input: &[u8],
) -> (Result<GameStatus, GameError>, String) {
    let mut session = GameSession::new(rows, secret).unwrap();
    let mut console = TerminalConsole::new(Cursor::new(input.to_vec()), Vec::<u8>::new())
        .with_color(false)
        .with_clear_screen(false);
    let result = session.run(&mut console);
    let output = String::from_utf8(console.into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_reference_game_won() {
    let (result, output) = play([1, 5, 2, 6], 5, "1234\n1 5 2 6\n");

    assert_eq!(result.unwrap(), GameStatus::Won);
    assert!(output.starts_with("Hello, and welcome to a friendly game of Mastermind!"));
    assert!(output.contains(" 1: [1] [2] [3] [4]   \u{25CF} \u{25CB} \u{00B7} \u{00B7}"));
    assert!(output.contains(" 2: [1] [5] [2] [6]   \u{25CF} \u{25CF} \u{25CF} \u{25CF}"));
    assert!(output.contains("You cracked the code in 2 rounds."));
    assert!(!output.contains("Out of rows!"));
}

#[test]
fn test_game_lost_reveals_code() {
    let (result, output) = play([1, 2, 3, 4], 2, "5555\n5555\n");

    assert_eq!(result.unwrap(), GameStatus::Lost);
    assert!(output.contains("Out of rows! The code was: [1] [2] [3] [4]"));
}

#[test]
fn test_invalid_lines_reported_then_reprompted() {
    let (result, output) = play([2, 2, 2, 2], 1, "123\n1237\nab34\n2222\n");

    assert_eq!(result.unwrap(), GameStatus::Won);
    assert!(output.contains("Invalid input: expected 4 numbers, got 3"));
    assert!(output.contains("Invalid input: 7 is not between 1 and 6"));
    assert!(output.contains("Invalid input: 'a' is not a number"));
    assert_eq!(output.matches("Please type four numbers").count(), 4);
}

#[test]
fn test_non_utf8_line_is_rejected_not_fatal() {
    let (result, output) = play_bytes([1, 2, 3, 4], 1, b"\xFF\xFE\n1234\n");

    assert_eq!(result.unwrap(), GameStatus::Won);
    assert!(output.contains("Invalid input: expected 4 numbers, got 2"));
    assert_eq!(output.matches("Please type four numbers").count(), 2);
}

#[test]
fn test_input_ending_early_is_an_error() {
    let (result, _) = play([1, 2, 3, 4], 3, "6666\n");
    assert!(matches!(result, Err(GameError::Io(_))));
}

#[test]
fn test_config_drives_session() {
    let config = GameConfig {
        rows: 3,
        secret: SecretSource::parse_literal("6543").unwrap(),
        ..GameConfig::default()
    };
    config.validate().unwrap();

    let (result, output) = play(config.secret.resolve(), config.rows, "6543\n");
    assert_eq!(result.unwrap(), GameStatus::Won);
    assert!(output.contains("You have 3 rows"));
    assert!(output.contains("in 1 round."));
}
