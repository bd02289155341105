//! A heap-backed bit grid for rows×cols boards chosen at runtime.
//!
//! Cells are packed row-major into `u64` words. The type only allocates at
//! construction; all per-cell operations are branch-and-mask work on the
//! word vector. Bounds are checked on every access and reported as
//! [`BitGridError`].

use alloc::{vec, vec::Vec};
use core::fmt;
use core::ops::{BitAndAssign, BitOrAssign};

const WORD_BITS: usize = u64::BITS as usize;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is outside [0..rows) × [0..cols).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A rows×cols grid of bits, all cleared at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl BitGrid {
    /// Create an empty grid (all bits cleared).
    pub fn new(rows: usize, cols: usize) -> Self {
        let bits = rows * cols;
        let words = vec![0u64; bits.div_ceil(WORD_BITS)];
        BitGrid { rows, cols, words }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let idx = self.index(row, col)?;
        Ok((self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 != 0)
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.words[idx / WORD_BITS] |= 1 << (idx % WORD_BITS);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.index(row, col)?;
        self.words[idx / WORD_BITS] &= !(1 << (idx % WORD_BITS));
        Ok(())
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitGridError> {
        if row >= self.rows || col >= self.cols {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.cols + col)
        }
    }

    /// True if any cell is set in both grids. Panics if dimensions differ;
    /// all grids for one board share its dimensions.
    pub fn intersects(&self, other: &BitGrid) -> bool {
        assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Grid expanded by one cell around every set bit. With `diagonals` the
    /// expansion covers the full 8-neighborhood, otherwise only cells
    /// sharing an edge.
    pub fn dilated(&self, diagonals: bool) -> BitGrid {
        let mut out = self.clone();
        for (r, c) in self.iter_set_bits() {
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    if !diagonals && dr != 0 && dc != 0 {
                        continue;
                    }
                    let (nr, nc) = (r as i64 + dr, c as i64 + dc);
                    if nr >= 0 && nc >= 0 {
                        // out of the upper bounds is simply clipped
                        let _ = out.set(nr as usize, nc as usize);
                    }
                }
            }
        }
        out
    }

    /// Iterator over the set bits of the grid, row-major.
    pub fn iter_set_bits(&self) -> SetBits<'_> {
        SetBits { grid: self, idx: 0 }
    }

    /// Creates a grid from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(rows: usize, cols: usize, iter: I) -> Result<Self, BitGridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, cols);
        for (r, c) in iter {
            grid.set(r, c)?;
        }
        Ok(grid)
    }
}

impl BitOrAssign<&BitGrid> for BitGrid {
    fn bitor_assign(&mut self, rhs: &BitGrid) {
        assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a |= b;
        }
    }
}

impl BitAndAssign<&BitGrid> for BitGrid {
    fn bitand_assign(&mut self, rhs: &BitGrid) {
        assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a &= b;
        }
    }
}

impl fmt::Debug for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}x{}>:", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a [`BitGrid`].
#[derive(Clone)]
pub struct SetBits<'a> {
    grid: &'a BitGrid,
    idx: usize,
}

impl<'a> Iterator for SetBits<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.grid.rows * self.grid.cols;
        while self.idx < total {
            let idx = self.idx;
            self.idx += 1;
            if (self.grid.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 != 0 {
                return Some((idx / self.grid.cols, idx % self.grid.cols));
            }
        }
        None
    }
}
