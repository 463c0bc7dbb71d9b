//! Mastermind game logic.
//!
//! Handles secret code generation, scoring a guess against the secret, and
//! driving a session through a [`Console`].

use super::{GameSession, GameStatus, Score};
use crate::board::{HintState, Round, Symbol};
use crate::constants::{CODE_LENGTH, MAX_SYMBOL, MIN_SYMBOL};
use crate::error::GameError;
use crate::input::parse_guess;
use crate::ui::Console;
use rand::Rng;

/// Generate a secret code. Colours may repeat.
pub fn generate_code<R: Rng>(rng: &mut R) -> [Symbol; CODE_LENGTH] {
    [0; CODE_LENGTH].map(|_| rng.gen_range(MIN_SYMBOL..=MAX_SYMBOL))
}

/// Count positions where guess and secret hold the same colour.
pub fn exact_matches(guess: &[Symbol], secret: &[Symbol]) -> usize {
    guess.iter().zip(secret).filter(|(g, s)| g == s).count()
}

/// Count colours shared by both multisets. Each secret peg can be claimed by
/// at most one guess peg; the first remaining instance is removed on a hit.
/// Exact matches are included in the tally.
pub fn tally_colour_matches(guess_colours: &[Symbol], secret_colours: &[Symbol]) -> usize {
    let mut remaining = secret_colours.to_vec();
    let mut tally = 0;
    for colour in guess_colours {
        if let Some(index) = remaining.iter().position(|c| c == colour) {
            remaining.remove(index);
            tally += 1;
        }
    }
    tally
}

/// Score a guess round against the secret round.
pub fn score(guess: &Round, secret: &Round) -> Score {
    let exact = exact_matches(&guess.code(), &secret.code());
    let tally = tally_colour_matches(&guess.colour_multiset(), &secret.colour_multiset());
    Score {
        exact,
        colour_only: tally - exact,
    }
}

/// Build the hint row for a score: exact hints first, then colour-only,
/// then no-match. Hints are not tied to guess positions.
pub fn hint_row(score: Score) -> [HintState; CODE_LENGTH] {
    let states = std::iter::repeat(HintState::Exact)
        .take(score.exact)
        .chain(std::iter::repeat(HintState::ColourOnly).take(score.colour_only))
        .chain(std::iter::repeat(HintState::None).take(score.misses()));

    let mut hints = [HintState::None; CODE_LENGTH];
    for (hint, state) in hints.iter_mut().zip(states) {
        *hint = state;
    }
    hints
}

impl GameSession {
    /// Play the next row with `code`. Returns the score, or `None` once the
    /// session is over.
    pub fn submit_guess(&mut self, code: [Symbol; CODE_LENGTH]) -> Option<Score> {
        if self.status.is_over() {
            return None;
        }

        let round = &mut self.rounds[self.played];
        round.set_code(&code);
        if !round.is_code_complete() {
            log::debug!("round {} scored with unset holes: {:?}", self.played + 1, round.code());
        }
        let result = score(round, &self.secret);
        round.set_hints(&hint_row(result));
        round.mark_completed();
        self.played += 1;

        log::debug!(
            "round {}: exact={} colour_only={}",
            self.played,
            result.exact,
            result.colour_only
        );

        if result.is_solved() {
            self.status = GameStatus::Won;
        } else if self.played >= self.rounds.len() {
            self.status = GameStatus::Lost;
        }

        Some(result)
    }

    /// Ask the console until it yields a valid guess.
    fn read_guess<C: Console>(console: &mut C) -> Result<[Symbol; CODE_LENGTH], GameError> {
        loop {
            let tokens = console.prompt_and_read_guess()?;
            match parse_guess(&tokens) {
                Ok(code) => return Ok(code),
                Err(err) => {
                    log::debug!("rejected input {:?}: {}", tokens, err);
                    console.report_invalid(&err)?;
                }
            }
        }
    }

    /// Play the session to the end through `console`.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<GameStatus, GameError> {
        console.welcome(self.rows())?;

        while !self.status.is_over() {
            let code = Self::read_guess(console)?;
            self.submit_guess(code);
            console.render_board(self.completed_rounds())?;
        }

        match self.status {
            GameStatus::Won => console.announce_win(self.played)?,
            GameStatus::Lost => console.announce_loss(&self.secret)?,
            GameStatus::InProgress => {}
        }
        log::info!(
            "game over: {:?} after {} of {} rounds",
            self.status,
            self.played,
            self.rows()
        );
        Ok(self.status)
    }
}
