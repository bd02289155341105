#![cfg(feature = "std")]

//! Input adapter and orchestration loop.
//!
//! The controller holds exactly three things: the input source, the view,
//! and (per call) the model it drives. Raw guess tokens are parsed and
//! validated here; malformed input and rejected guesses re-prompt without
//! consuming a turn.

use std::fmt;
use std::io::BufRead;

use anyhow::{bail, Context};

use crate::common::GameError;
use crate::game::GameModel;
use crate::view::ConsoleView;

/// Reasons a raw guess token is rejected before it reaches the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessParseError {
    /// Token is empty or not letter-then-digits.
    Malformed,
    /// Row letter is outside the board.
    RowOutOfRange { max: char },
    /// Column number is outside the board.
    ColOutOfRange { max: usize },
}

impl fmt::Display for GuessParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessParseError::Malformed => {
                write!(f, "Guess must be a row letter followed by a column number (e.g., A5).")
            }
            GuessParseError::RowOutOfRange { max } => {
                write!(f, "Row must be a letter between A and {}.", max)
            }
            GuessParseError::ColOutOfRange { max } => {
                write!(f, "Column must be a number between 0 and {}.", max)
            }
        }
    }
}

impl std::error::Error for GuessParseError {}

/// Parse a raw guess token ("A5", case insensitive, multi-digit columns
/// allowed) into `(row, col)` within the given extents.
pub fn parse_guess(token: &str, rows: usize, cols: usize) -> Result<(usize, usize), GuessParseError> {
    let token = token.trim();
    let mut chars = token.chars();
    let row_ch = chars.next().ok_or(GuessParseError::Malformed)?;
    if !row_ch.is_ascii_alphabetic() {
        return Err(GuessParseError::Malformed);
    }
    let col_str = chars.as_str();
    if col_str.is_empty() || !col_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessParseError::Malformed);
    }
    let row = (row_ch.to_ascii_uppercase() as u8 - b'A') as usize;
    if row >= rows {
        return Err(GuessParseError::RowOutOfRange {
            max: (b'A' + (rows - 1).min(25) as u8) as char,
        });
    }
    let col: usize = col_str.parse().map_err(|_| GuessParseError::Malformed)?;
    if col >= cols {
        return Err(GuessParseError::ColOutOfRange { max: cols - 1 });
    }
    Ok((row, col))
}

/// Drives one game session: prompt, read, parse, guess, render, repeat.
pub struct GameController<R: BufRead, W: std::io::Write> {
    input: R,
    view: ConsoleView<W>,
}

impl<R: BufRead, W: std::io::Write> GameController<R, W> {
    pub fn new(input: R, view: ConsoleView<W>) -> Self {
        GameController { input, view }
    }

    /// Play `model` to completion. Fails on I/O errors, on input ending
    /// before the game does, and on lifecycle misuse.
    pub fn play_game(&mut self, model: &mut GameModel) -> anyhow::Result<()> {
        model.start_game().context("failed to start the game")?;

        self.view.welcome()?;
        self.view.max_guesses(model.max_guesses())?;

        while !model.is_game_over() {
            self.view.prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input ended unexpectedly.");
            }
            let token = line.trim();

            let (row, col) = match parse_guess(token, model.rows(), model.cols()) {
                Ok(coord) => coord,
                Err(e) => {
                    log::debug!("rejected guess token {:?}: {}", token, e);
                    self.view.error(&e.to_string())?;
                    continue;
                }
            };

            let result = match model.make_guess(row, col) {
                Ok(result) => result,
                // board-level rejections are recoverable and cost nothing
                Err(GameError::Board(e)) => {
                    log::debug!("model rejected guess ({}, {}): {}", row, col, e);
                    self.view.error(&e.to_string())?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            self.view.guess_count(model.guess_count())?;
            match result {
                crate::common::GuessResult::Hit => self.view.hit()?,
                crate::common::GuessResult::Miss => self.view.miss()?,
                crate::common::GuessResult::Sink(kind) => {
                    self.view.hit()?;
                    self.view.sink(kind)?;
                }
            }
            self.view.cell_grid(&model.cell_grid())?;
        }

        self.view.game_over(model.all_ships_sunk())?;
        self.view.ship_grid(&model.ship_grid())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_tokens() {
        assert_eq!(parse_guess("A5", 10, 10), Ok((0, 5)));
        assert_eq!(parse_guess("j9", 10, 10), Ok((9, 9)));
        assert_eq!(parse_guess(" B12 ", 10, 15), Ok((1, 12)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "5A", "AA", "A", "A-1", "A 5"] {
            assert_eq!(
                parse_guess(token, 10, 10),
                Err(GuessParseError::Malformed),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(
            parse_guess("K0", 10, 10),
            Err(GuessParseError::RowOutOfRange { max: 'J' })
        );
        assert_eq!(
            parse_guess("A10", 10, 10),
            Err(GuessParseError::ColOutOfRange { max: 9 })
        );
    }
}
