//! Randomized fleet placement with bounded retries.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::ship::{Orientation, ShipKind};

/// Attempts per ship before placement is declared impossible. Exhaustion
/// signals a fleet that does not fit the configured board, not bad luck.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Places a fleet onto an empty board by sampling anchors and orientations
/// until every ship fits. The RNG is injected so a seeded source gives
/// reproducible layouts.
pub struct ShipPlacer {
    max_attempts: u32,
}

impl ShipPlacer {
    pub fn new() -> Self {
        ShipPlacer {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Place every ship of `fleet`, longest first, onto `board`.
    ///
    /// Longest-first ordering leaves the most room for the awkward ships;
    /// each individual placement retries against the board until it sticks
    /// or the attempt bound runs out.
    pub fn place_fleet<R: Rng>(
        &self,
        rng: &mut R,
        board: &mut Board,
        fleet: &[ShipKind],
    ) -> Result<(), BoardError> {
        let mut ordered: Vec<ShipKind> = fleet.to_vec();
        ordered.sort_by(|a, b| b.length().cmp(&a.length()));
        for kind in ordered {
            self.place_one(rng, board, kind)?;
        }
        Ok(())
    }

    fn place_one<R: Rng>(
        &self,
        rng: &mut R,
        board: &mut Board,
        kind: ShipKind,
    ) -> Result<(), BoardError> {
        let (rows, cols) = (board.rows(), board.cols());
        for _ in 0..self.max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // sample only anchors from which the ship can fit at all
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (rows - 1, cols.checked_sub(kind.length())),
                Orientation::Vertical => {
                    match rows.checked_sub(kind.length()) {
                        Some(r) => (r, Some(cols - 1)),
                        None => continue,
                    }
                }
            };
            let max_c = match max_c {
                Some(c) => c,
                None => continue,
            };
            let row = rng.random_range(0..=max_r);
            let col = rng.random_range(0..=max_c);
            match board.place(kind, row, col, orientation) {
                Ok(()) => return Ok(()),
                Err(BoardError::ShipOverlaps) | Err(BoardError::ShipAdjacent) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::PlacementExhausted(kind))
    }
}

impl Default for ShipPlacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdjacencyRule;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn places_full_fleet_on_default_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::new(10, 10, AdjacencyRule::EightNeighbor);
        ShipPlacer::new()
            .place_fleet(&mut rng, &mut board, &ShipKind::ALL)
            .unwrap();
        assert_eq!(board.ships().len(), 5);
        let occupied: usize = board
            .ship_grid()
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        assert_eq!(occupied, 17);
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let layout = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut board = Board::new(10, 10, AdjacencyRule::EightNeighbor);
            ShipPlacer::new()
                .place_fleet(&mut rng, &mut board, &ShipKind::ALL)
                .unwrap();
            board.ship_grid()
        };
        assert_eq!(layout(42), layout(42));
    }

    #[test]
    fn impossible_fleet_exhausts_attempts() {
        let mut rng = SmallRng::seed_from_u64(1);
        // a carrier cannot fit on a 4x4 board in either orientation
        let mut board = Board::new(4, 4, AdjacencyRule::EightNeighbor);
        assert_eq!(
            ShipPlacer::new().place_fleet(&mut rng, &mut board, &[ShipKind::Carrier]),
            Err(BoardError::PlacementExhausted(ShipKind::Carrier))
        );
    }
}
