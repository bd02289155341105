//! Session lifecycle and guess arbitration.

use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{CellState, GameError, GuessResult};
use crate::config::{ConfigError, GameConfig};
use crate::placer::ShipPlacer;
use crate::ship::ShipKind;

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Terminal,
}

/// The single entry point consumed by an orchestration loop: owns the board
/// for one session and arbitrates every guess against it.
///
/// Rejected guesses (out of bounds, duplicates, wrong phase) never consume
/// a turn and never mutate session state, so the guess budget counts only
/// genuine attempts. The model never logs or prints; every failure is
/// returned to the caller.
#[derive(Debug)]
pub struct GameModel {
    config: GameConfig,
    rng: SmallRng,
    board: Board,
    phase: Phase,
    guess_count: u32,
}

impl GameModel {
    /// Create a session from a validated configuration and a seeded RNG.
    /// Configuration problems surface here, before any game state exists.
    pub fn new(config: GameConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols, config.adjacency);
        Ok(GameModel {
            config,
            rng,
            board,
            phase: Phase::NotStarted,
            guess_count: 0,
        })
    }

    /// Place the fleet and open the session for guesses.
    ///
    /// Calling this on an already started session fails with
    /// [`GameError::AlreadyStarted`]; a fleet that cannot fit the board
    /// fails with a placement-exhausted error and leaves the session
    /// unstarted.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        let mut board = Board::new(self.config.rows, self.config.cols, self.config.adjacency);
        ShipPlacer::new().place_fleet(&mut self.rng, &mut board, &self.config.fleet)?;
        self.board = board;
        self.phase = Phase::Active;
        Ok(())
    }

    /// Process one guess. Returns the outcome and, as a side effect of a
    /// *valid* guess only, advances the guess count and possibly the phase.
    pub fn make_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, GameError> {
        match self.phase {
            Phase::NotStarted => return Err(GameError::NotStarted),
            Phase::Terminal => return Err(GameError::GameOver),
            Phase::Active => {}
        }
        let result = self.board.record_guess(row, col)?;
        self.guess_count += 1;
        if self.guess_count >= self.config.max_guesses || self.board.all_sunk() {
            self.phase = Phase::Terminal;
        }
        Ok(result)
    }

    /// True iff the session is terminal (win or budget exhaustion).
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// True iff every placed ship is sunk. After termination this
    /// distinguishes a win from running out of guesses.
    pub fn all_ships_sunk(&self) -> bool {
        self.board.all_sunk()
    }

    /// Guesses accepted so far.
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// The session's guess budget.
    pub fn max_guesses(&self) -> u32 {
        self.config.max_guesses
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board rows.
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Board columns.
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Snapshot of per-cell guess states for presentation.
    pub fn cell_grid(&self) -> Vec<Vec<CellState>> {
        self.board.cell_grid()
    }

    /// Snapshot of ship occupancy for presentation after game end.
    pub fn ship_grid(&self) -> Vec<Vec<Option<ShipKind>>> {
        self.board.ship_grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BoardError;
    use rand::SeedableRng;

    fn model(max_guesses: u32) -> GameModel {
        let config = GameConfig {
            max_guesses,
            ..GameConfig::default()
        };
        GameModel::new(config, SmallRng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn invalid_config_fails_before_any_session() {
        let config = GameConfig {
            fleet: alloc::vec::Vec::new(),
            ..GameConfig::default()
        };
        assert_eq!(
            GameModel::new(config, SmallRng::seed_from_u64(0)).unwrap_err(),
            ConfigError::EmptyFleet
        );
    }

    #[test]
    fn guessing_before_start_is_rejected() {
        let mut m = model(5);
        assert_eq!(m.make_guess(0, 0), Err(GameError::NotStarted));
        assert_eq!(m.guess_count(), 0);
    }

    #[test]
    fn double_start_is_an_error() {
        let mut m = model(5);
        m.start_game().unwrap();
        assert_eq!(m.start_game(), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn rejected_guesses_are_free() {
        let mut m = model(5);
        m.start_game().unwrap();
        m.make_guess(0, 0).unwrap();
        assert_eq!(m.guess_count(), 1);
        assert_eq!(
            m.make_guess(0, 0),
            Err(GameError::Board(BoardError::AlreadyGuessed { row: 0, col: 0 }))
        );
        assert_eq!(
            m.make_guess(10, 0),
            Err(GameError::Board(BoardError::OutOfBounds { row: 10, col: 0 }))
        );
        assert_eq!(m.guess_count(), 1);
        assert_eq!(m.phase(), Phase::Active);
    }

    #[test]
    fn budget_exhaustion_terminates_without_a_win() {
        let mut m = model(3);
        m.start_game().unwrap();
        // pick guaranteed misses from the occupancy snapshot
        let ship_grid = m.ship_grid();
        let mut empties = (0..10)
            .flat_map(|r| (0..10).map(move |c| (r, c)))
            .filter(|&(r, c)| ship_grid[r][c].is_none());
        for _ in 0..3 {
            let (r, c) = empties.next().unwrap();
            assert_eq!(m.make_guess(r, c), Ok(GuessResult::Miss));
        }
        assert!(m.is_game_over());
        assert!(!m.all_ships_sunk());
        assert_eq!(m.make_guess(9, 9), Err(GameError::GameOver));
        assert_eq!(m.guess_count(), 3);
    }

    #[test]
    fn sinking_the_fleet_wins_within_budget() {
        let mut m = model(50);
        m.start_game().unwrap();
        let ship_grid = m.ship_grid();
        let targets: alloc::vec::Vec<(usize, usize)> = (0..10)
            .flat_map(|r| (0..10).map(move |c| (r, c)))
            .filter(|&(r, c)| ship_grid[r][c].is_some())
            .collect();
        assert_eq!(targets.len(), 17);
        for (i, &(r, c)) in targets.iter().enumerate() {
            assert!(!m.is_game_over());
            assert!(m.make_guess(r, c).unwrap().is_hit());
            assert_eq!(m.guess_count() as usize, i + 1);
        }
        assert!(m.is_game_over());
        assert!(m.all_ships_sunk());
    }

    #[test]
    fn cell_grid_snapshot_is_idempotent() {
        let mut m = model(5);
        m.start_game().unwrap();
        m.make_guess(4, 4).unwrap();
        assert_eq!(m.cell_grid(), m.cell_grid());
    }
}
