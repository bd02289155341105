#![cfg(feature = "std")]

//! Presentation adapter: renders model snapshots as text.
//!
//! The view owns nothing but its output sink and performs no game logic;
//! everything it prints comes from the read-only snapshots and scalar
//! accessors the model exposes.

use std::io::{self, Write};

use crate::common::CellState;
use crate::ship::ShipKind;

/// Text renderer over any `io::Write` sink.
pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        ConsoleView { out }
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Battleship!")
    }

    pub fn max_guesses(&mut self, max: u32) -> io::Result<()> {
        writeln!(self.out, "Maximum Guesses Allowed: {}", max)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Enter your guess (row and column, e.g., A5): ")?;
        self.out.flush()
    }

    pub fn guess_count(&mut self, count: u32) -> io::Result<()> {
        writeln!(self.out, "Guesses Made: {}", count)
    }

    pub fn hit(&mut self) -> io::Result<()> {
        writeln!(self.out, "It's a HIT!")
    }

    pub fn miss(&mut self) -> io::Result<()> {
        writeln!(self.out, "It's a MISS!")
    }

    pub fn sink(&mut self, kind: ShipKind) -> io::Result<()> {
        writeln!(self.out, "You sank the {}!", kind.name())
    }

    pub fn game_over(&mut self, win: bool) -> io::Result<()> {
        if win {
            writeln!(self.out, "Congratulations! You have sunk all the ships!")
        } else {
            writeln!(
                self.out,
                "Game Over! You have reached the maximum number of guesses."
            )
        }
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {}", message)
    }

    /// Current guess grid: numbered columns, lettered rows, cell symbols.
    pub fn cell_grid(&mut self, grid: &[Vec<CellState>]) -> io::Result<()> {
        writeln!(self.out, "Current Game Grid:")?;
        self.grid_body(grid, |cell| cell.symbol())
    }

    /// Final ship positions, revealed after the game ends.
    pub fn ship_grid(&mut self, grid: &[Vec<Option<ShipKind>>]) -> io::Result<()> {
        writeln!(self.out, "Final Ship Positions:")?;
        self.grid_body(grid, |cell| cell.map_or('-', |kind| kind.symbol()))
    }

    fn grid_body<T, F>(&mut self, grid: &[Vec<T>], symbol: F) -> io::Result<()>
    where
        F: Fn(&T) -> char,
    {
        let cols = grid.first().map_or(0, |row| row.len());
        write!(self.out, "  ")?;
        for c in 0..cols {
            write!(self.out, "{} ", c % 10)?;
        }
        writeln!(self.out)?;
        for (r, row) in grid.iter().enumerate() {
            write!(self.out, "{} ", row_label(r))?;
            for cell in row {
                write!(self.out, "{} ", symbol(cell))?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Letter label for a row index, `A` through `Z`, wrapping on oversized
/// boards the same way the column header wraps digits.
pub fn row_label(row: usize) -> char {
    (b'A' + (row % 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_grid_renders_symbols_and_labels() {
        let mut buf = Vec::new();
        let grid = vec![
            vec![CellState::Unknown, CellState::Hit],
            vec![CellState::Miss, CellState::Unknown],
        ];
        ConsoleView::new(&mut buf).cell_grid(&grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Current Game Grid:\n  0 1 \nA . X \nB o . \n");
    }

    #[test]
    fn ship_grid_renders_dashes_for_water() {
        let mut buf = Vec::new();
        let grid = vec![vec![Some(ShipKind::Destroyer), None]];
        ConsoleView::new(&mut buf).ship_grid(&grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Final Ship Positions:\n  0 1 \nA D - \n");
    }
}
