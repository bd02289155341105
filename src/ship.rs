//! Ship kinds and placed ship instances.

use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship: name, length and display symbol are a pure lookup on the
/// tag, no per-instance data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Every kind, longest first.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Number of cells the ship occupies.
    pub const fn length(&self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Symbol used when revealing ship positions.
    pub const fn symbol(&self) -> char {
        match self {
            ShipKind::Carrier => 'C',
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'R',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
        }
    }
}

/// A ship placed on the board: anchor, orientation, and per-segment hits.
///
/// Coordinates are fixed at construction and never change afterwards; only
/// the hit mask evolves.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    row: usize,
    col: usize,
    // bit i set when segment i (counting from the anchor) has been hit
    hits: u32,
}

impl Ship {
    /// Place a ship at (`row`, `col`) with `orientation` on a board of the
    /// given extents. Fails if any occupied cell would fall outside.
    pub fn new(
        kind: ShipKind,
        orientation: Orientation,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, BoardError> {
        let len = kind.length();
        let fits = match orientation {
            Orientation::Horizontal => row < rows && col + len <= cols,
            Orientation::Vertical => col < cols && row + len <= rows,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            kind,
            orientation,
            row,
            col,
            hits: 0,
        })
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Anchor of the ship (row, col).
    pub fn anchor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The cells the ship occupies, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.kind.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Segment index of (`row`, `col`) if the ship occupies that cell.
    pub fn segment_at(&self, row: usize, col: usize) -> Option<usize> {
        self.cells().position(|cell| cell == (row, col))
    }

    /// Register a hit at (`row`, `col`). Returns `true` if the cell belongs
    /// to this ship and records it.
    pub fn record_hit(&mut self, row: usize, col: usize) -> bool {
        match self.segment_at(row, col) {
            Some(i) => {
                self.hits |= 1 << i;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() as usize == self.kind.length()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, anchor: ({}, {}), orientation: {:?}, hits: {} }}",
            self.kind.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits.count_ones(),
        )
    }
}
