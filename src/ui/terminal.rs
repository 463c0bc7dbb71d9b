//! Line-based terminal console built on crossterm.

use super::palette::{code_peg, hint_peg, legend};
use super::Console;
use crate::board::{HintState, Round};
use crate::constants::{colour_name, CODE_LENGTH, MAX_SYMBOL, MIN_SYMBOL};
use crate::error::InputError;
use crate::input::tokenize;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads guesses line by line from `R` and writes the board to `W`.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    color: bool,
    clear_screen: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: true,
            clear_screen: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// One board line: row number, the four code pegs, then the four hint pegs.
pub fn format_round(number: usize, round: &Round, color: bool) -> String {
    let code: Vec<String> = round.code().iter().map(|&s| code_peg(s, color)).collect();
    let hints: Vec<String> = round.hints().iter().map(|&h| hint_peg(h, color)).collect();
    format!("{:>2}: {}   {}", number, code.join(" "), hints.join(" "))
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn welcome(&mut self, rows: usize) -> io::Result<()> {
        let colours: Vec<String> = (MIN_SYMBOL..=MAX_SYMBOL)
            .filter_map(|s| colour_name(s).map(|name| format!("{} = {}", s, name)))
            .collect();
        let w = &mut self.writer;
        writeln!(w, "Hello, and welcome to a friendly game of Mastermind!")?;
        writeln!(w, "We would like to remind you of the rules of the game:")?;
        writeln!(
            w,
            "  - A secret code of {} colours has been chosen; colours may repeat.",
            CODE_LENGTH
        )?;
        writeln!(w, "  - Colours: {}.", colours.join(", "))?;
        writeln!(w, "  - You have {} rows to crack it.", rows)?;
        writeln!(
            w,
            "  - After each guess: {} right colour in the right place, {} right colour in the wrong place, {} no match.",
            hint_peg(HintState::Exact, self.color),
            hint_peg(HintState::ColourOnly, self.color),
            hint_peg(HintState::None, self.color),
        )?;
        writeln!(w, "  - Hints are not in guess order.")?;
        writeln!(w)?;
        w.flush()
    }

    fn prompt_and_read_guess(&mut self) -> io::Result<Vec<String>> {
        writeln!(
            self.writer,
            "Please type four numbers between (inclusive) 1 and 6 representing the following colours:"
        )?;
        writeln!(self.writer, "{}", legend(self.color))?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail validation as text.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }
        Ok(tokenize(&String::from_utf8_lossy(&line)))
    }

    fn report_invalid(&mut self, err: &InputError) -> io::Result<()> {
        writeln!(self.writer, "Invalid input: {}", err)?;
        self.writer.flush()
    }

    fn render_board(&mut self, rounds: &[Round]) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        for (i, round) in rounds.iter().enumerate().filter(|(_, r)| r.is_completed()) {
            writeln!(self.writer, "{}", format_round(i + 1, round, self.color))?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }

    fn announce_win(&mut self, rounds_used: usize) -> io::Result<()> {
        let noun = if rounds_used == 1 { "round" } else { "rounds" };
        writeln!(
            self.writer,
            "Congratulations! You cracked the code in {} {}.",
            rounds_used, noun
        )?;
        self.writer.flush()
    }

    fn announce_loss(&mut self, secret: &Round) -> io::Result<()> {
        let code: Vec<String> = secret
            .code()
            .iter()
            .map(|&s| code_peg(s, self.color))
            .collect();
        writeln!(self.writer, "Out of rows! The code was: {}", code.join(" "))?;
        self.writer.flush()
    }
}
