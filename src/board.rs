//! Game board state: ship occupancy and guess bookkeeping over [`BitGrid`]s.

use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, CellState, GuessResult};
use crate::config::AdjacencyRule;
use crate::ship::{Orientation, Ship, ShipKind};

/// A rows×cols board owning its placed ships and the hit/miss masks.
///
/// Every coordinate belongs to at most one ship, and a guessed cell is a
/// hit exactly when it belongs to one. Both invariants are enforced here
/// and nowhere else.
pub struct Board {
    rows: usize,
    cols: usize,
    adjacency: AdjacencyRule,
    ships: Vec<Ship>,
    ship_map: BitGrid,
    hits: BitGrid,
    misses: BitGrid,
}

impl Board {
    /// Create an empty board (no ships placed, no guesses recorded).
    pub fn new(rows: usize, cols: usize, adjacency: AdjacencyRule) -> Self {
        Board {
            rows,
            cols,
            adjacency,
            ships: Vec::new(),
            ship_map: BitGrid::new(rows, cols),
            hits: BitGrid::new(rows, cols),
            misses: BitGrid::new(rows, cols),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Immutable view of the placed ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.is_sunk())
    }

    /// Place a ship of `kind` anchored at (row, col) with `orientation`.
    ///
    /// Fails without mutating anything if the ship would leave the board,
    /// overlap an existing ship, or violate the adjacency rule. On success
    /// the cells are permanently owned by the new ship.
    pub fn place(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::new(kind, orientation, row, col, self.rows, self.cols)?;
        let mask = BitGrid::from_iter(self.rows, self.cols, ship.cells())?;
        if mask.intersects(&self.ship_map) {
            return Err(BoardError::ShipOverlaps);
        }
        if self.adjacency.restricts() {
            let zone = mask.dilated(self.adjacency.includes_diagonals());
            if zone.intersects(&self.ship_map) {
                return Err(BoardError::ShipAdjacent);
            }
        }
        self.ship_map |= &mask;
        self.ships.push(ship);
        Ok(())
    }

    /// Process a guess at (row, col), marking the cell and reporting the
    /// result. Out-of-bounds and repeated guesses are rejected with no
    /// state change.
    pub fn record_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyGuessed { row, col });
        }
        if self.ship_map.get(row, col)? {
            self.hits.set(row, col)?;
            for ship in self.ships.iter_mut() {
                if ship.record_hit(row, col) {
                    if ship.is_sunk() {
                        return Ok(GuessResult::Sink(ship.kind()));
                    }
                    return Ok(GuessResult::Hit);
                }
            }
            // ship_map and ships can only disagree through a bug in place()
            unreachable!("occupied cell without an owning ship");
        } else {
            self.misses.set(row, col)?;
            Ok(GuessResult::Miss)
        }
    }

    /// Per-cell guess states, row-major. Pure snapshot, no side effects.
    pub fn cell_grid(&self) -> Vec<Vec<CellState>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        if self.hits.get(r, c).unwrap_or(false) {
                            CellState::Hit
                        } else if self.misses.get(r, c).unwrap_or(false) {
                            CellState::Miss
                        } else {
                            CellState::Unknown
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Per-cell ship occupancy, row-major; `None` for open water.
    pub fn ship_grid(&self) -> Vec<Vec<Option<ShipKind>>> {
        let mut grid = alloc::vec![alloc::vec![None; self.cols]; self.rows];
        for ship in &self.ships {
            for (r, c) in ship.cells() {
                grid[r][c] = Some(ship.kind());
            }
        }
        grid
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_board() -> Board {
        Board::new(10, 10, AdjacencyRule::Allowed)
    }

    #[test]
    fn overlap_is_rejected_without_mutation() {
        let mut board = open_board();
        board
            .place(ShipKind::Cruiser, 0, 3, Orientation::Horizontal)
            .unwrap();
        assert_eq!(
            board.place(ShipKind::Destroyer, 0, 4, Orientation::Vertical),
            Err(BoardError::ShipOverlaps)
        );
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn out_of_bounds_placement_is_rejected() {
        let mut board = open_board();
        assert_eq!(
            board.place(ShipKind::Carrier, 7, 0, Orientation::Vertical),
            Err(BoardError::ShipOutOfBounds)
        );
    }

    #[test]
    fn adjacency_rules_restrict_neighbors() {
        let mut board = Board::new(10, 10, AdjacencyRule::EightNeighbor);
        board
            .place(ShipKind::Cruiser, 5, 5, Orientation::Horizontal)
            .unwrap();
        // corner contact at (4,4)-(5,5)
        assert_eq!(
            board.place(ShipKind::Destroyer, 4, 3, Orientation::Horizontal),
            Err(BoardError::ShipAdjacent)
        );

        let mut board = Board::new(10, 10, AdjacencyRule::FourNeighbor);
        board
            .place(ShipKind::Cruiser, 5, 5, Orientation::Horizontal)
            .unwrap();
        // same corner contact is fine with only edge restriction
        board
            .place(ShipKind::Destroyer, 4, 3, Orientation::Horizontal)
            .unwrap();
        // edge contact above the cruiser is not
        assert_eq!(
            board.place(ShipKind::Submarine, 4, 5, Orientation::Horizontal),
            Err(BoardError::ShipAdjacent)
        );
    }

    #[test]
    fn guesses_mark_hits_and_misses() {
        let mut board = open_board();
        board
            .place(ShipKind::Cruiser, 0, 3, Orientation::Horizontal)
            .unwrap();
        assert_eq!(board.record_guess(0, 3), Ok(GuessResult::Hit));
        assert_eq!(board.record_guess(5, 5), Ok(GuessResult::Miss));
        assert_eq!(board.record_guess(0, 4), Ok(GuessResult::Hit));
        assert_eq!(
            board.record_guess(0, 5),
            Ok(GuessResult::Sink(ShipKind::Cruiser))
        );
        assert!(board.all_sunk());

        let grid = board.cell_grid();
        assert_eq!(grid[0][3], CellState::Hit);
        assert_eq!(grid[5][5], CellState::Miss);
        assert_eq!(grid[9][9], CellState::Unknown);
    }

    #[test]
    fn duplicate_and_out_of_bounds_guesses_are_rejected() {
        let mut board = open_board();
        board
            .place(ShipKind::Destroyer, 2, 2, Orientation::Vertical)
            .unwrap();
        board.record_guess(2, 2).unwrap();
        assert_eq!(
            board.record_guess(2, 2),
            Err(BoardError::AlreadyGuessed { row: 2, col: 2 })
        );
        assert_eq!(
            board.record_guess(10, 0),
            Err(BoardError::OutOfBounds { row: 10, col: 0 })
        );
    }

    #[test]
    fn ship_grid_reports_occupancy() {
        let mut board = open_board();
        board
            .place(ShipKind::Destroyer, 1, 1, Orientation::Vertical)
            .unwrap();
        let grid = board.ship_grid();
        assert_eq!(grid[1][1], Some(ShipKind::Destroyer));
        assert_eq!(grid[2][1], Some(ShipKind::Destroyer));
        assert_eq!(grid[1][2], None);
    }

    #[test]
    fn empty_board_is_not_all_sunk() {
        assert!(!open_board().all_sunk());
    }
}
