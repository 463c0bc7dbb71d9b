//! Board data structures: code pegs, hint pegs and the rows they live in.
//!
//! Every cell is write-once. A write that would overwrite a set cell, or that
//! carries an out-of-range value, is silently ignored.

use crate::constants::{CODE_LENGTH, MAX_SYMBOL, MIN_SYMBOL, UNSET_SYMBOL};

/// A peg colour in `MIN_SYMBOL..=MAX_SYMBOL`. `UNSET_SYMBOL` marks an empty hole.
pub type Symbol = u8;

/// Returns true if `value` is a playable colour.
pub fn is_valid_symbol(value: Symbol) -> bool {
    (MIN_SYMBOL..=MAX_SYMBOL).contains(&value)
}

/// Feedback for one hint hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HintState {
    /// No match (also the value of a hole that was never scored)
    #[default]
    None,
    /// Right colour, wrong position
    ColourOnly,
    /// Right colour, right position
    Exact,
}

impl HintState {
    /// Only match states are ever written into a hint hole.
    fn is_writable(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One code hole in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodePosition {
    value: Symbol,
    set: bool,
}

impl CodePosition {
    pub fn new() -> Self {
        Self {
            value: UNSET_SYMBOL,
            set: false,
        }
    }

    /// Writes `value` if the hole is still empty and `value` is a colour.
    /// Returns whether the write happened.
    pub fn set(&mut self, value: Symbol) -> bool {
        if self.set || !is_valid_symbol(value) {
            return false;
        }
        self.value = value;
        self.set = true;
        true
    }

    pub fn value(&self) -> Symbol {
        self.value
    }

    pub fn is_set(&self) -> bool {
        self.set
    }
}

/// One hint hole in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintPosition {
    state: HintState,
    set: bool,
}

impl HintPosition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `state` if the hole is still empty and `state` is a match.
    /// `HintState::None` is never written, so a hole that scored "no match"
    /// stays unset.
    pub fn set(&mut self, state: HintState) -> bool {
        if self.set || !state.is_writable() {
            return false;
        }
        self.state = state;
        self.set = true;
        true
    }

    pub fn state(&self) -> HintState {
        self.state
    }

    pub fn is_set(&self) -> bool {
        self.set
    }
}

/// A single attempt: four code holes, four hint holes, and whether it has
/// been scored yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Round {
    codes: [CodePosition; CODE_LENGTH],
    hints: [HintPosition; CODE_LENGTH],
    completed: bool,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a round whose code holes are already filled.
    pub fn with_code(values: &[Symbol]) -> Self {
        let mut round = Self::new();
        round.set_code(values);
        round
    }

    /// Fills code holes in order. Values past the fourth are ignored.
    pub fn set_code(&mut self, values: &[Symbol]) {
        for (position, &value) in self.codes.iter_mut().zip(values) {
            position.set(value);
        }
    }

    /// Fills hint holes in order. Values past the fourth are ignored.
    pub fn set_hints(&mut self, states: &[HintState]) {
        for (position, &state) in self.hints.iter_mut().zip(states) {
            position.set(state);
        }
    }

    /// The code symbols in position order.
    pub fn code(&self) -> [Symbol; CODE_LENGTH] {
        self.codes.map(|p| p.value())
    }

    /// The hint states in hole order.
    pub fn hints(&self) -> [HintState; CODE_LENGTH] {
        self.hints.map(|p| p.state())
    }

    /// The code symbols as a multiset: duplicates kept, order irrelevant.
    pub fn colour_multiset(&self) -> Vec<Symbol> {
        self.codes.iter().map(|p| p.value()).collect()
    }

    /// True once every code hole holds a colour.
    pub fn is_code_complete(&self) -> bool {
        self.codes.iter().all(|p| p.is_set())
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
