//! Shared types for the game model: cell states, guess results, errors.

use crate::bitgrid::BitGridError;
use crate::ship::ShipKind;

/// Guess-perspective state of a single board cell. `Unknown` until guessed,
/// then exactly one irreversible transition to `Hit` or `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    Hit,
    Miss,
}

impl CellState {
    /// Symbol used by text renderings of the guess grid.
    pub fn symbol(&self) -> char {
        match self {
            CellState::Unknown => '.',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
        }
    }
}

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess hit an undepleted ship segment.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship, carrying its kind.
    Sink(ShipKind),
}

impl GuessResult {
    /// True for `Hit` and `Sink` alike.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Guess coordinate outside the grid extents.
    OutOfBounds { row: usize, col: usize },
    /// Guess was already made at this position.
    AlreadyGuessed { row: usize, col: usize },
    /// Ship placement would run past the grid extents.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship under the active adjacency rule.
    ShipAdjacent,
    /// Random placement could not fit this ship within the attempt bound.
    PlacementExhausted(ShipKind),
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        match err {
            BitGridError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::AlreadyGuessed { row, col } => {
                write!(f, "Guess was already made at ({}, {})", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement is adjacent to another ship"),
            BoardError::PlacementExhausted(kind) => {
                write!(
                    f,
                    "Unable to place {}: fleet does not fit this board",
                    kind.name()
                )
            }
        }
    }
}

/// Errors returned by GameModel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has not been started yet.
    NotStarted,
    /// `start_game` was called on an already started game.
    AlreadyStarted,
    /// The session is terminal; no further guesses are accepted.
    GameOver,
    /// A board-level rejection; never consumes a turn.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "Game has not been started"),
            GameError::AlreadyStarted => write!(f, "Game was already started"),
            GameError::GameOver => write!(f, "Game is over; no more guesses accepted"),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
