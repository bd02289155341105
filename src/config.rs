//! Game configuration: board extents, fleet, guess budget, adjacency rule.

use alloc::vec::Vec;
use core::fmt;

use crate::ship::ShipKind;

/// Placement constraint between distinct ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyRule {
    /// Ships may touch each other.
    Allowed,
    /// Cells sharing an edge with a ship are off limits to other ships.
    FourNeighbor,
    /// Cells sharing an edge or a corner are off limits.
    #[default]
    EightNeighbor,
}

impl AdjacencyRule {
    /// True when the rule forbids some neighborhood.
    pub fn restricts(&self) -> bool {
        !matches!(self, AdjacencyRule::Allowed)
    }

    /// True when corner contact is also forbidden.
    pub fn includes_diagonals(&self) -> bool {
        matches!(self, AdjacencyRule::EightNeighbor)
    }
}

/// Errors detected while validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns is zero.
    NonPositiveDimensions { rows: usize, cols: usize },
    /// The fleet contains no ships.
    EmptyFleet,
    /// The guess budget is zero.
    NoGuessBudget,
    /// A ship is longer than both board extents and can never be placed.
    ShipTooLong(ShipKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDimensions { rows, cols } => {
                write!(f, "Board dimensions must be positive, got {}x{}", rows, cols)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::NoGuessBudget => write!(f, "Maximum guesses must be positive"),
            ConfigError::ShipTooLong(kind) => {
                write!(f, "{} does not fit either board extent", kind.name())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Configuration for one game session, validated once before any session
/// state exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fleet: Vec<ShipKind>,
    pub max_guesses: u32,
    pub adjacency: AdjacencyRule,
}

impl GameConfig {
    /// Fail-fast validation of the whole configuration surface.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::NonPositiveDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::NoGuessBudget);
        }
        let longest_extent = self.rows.max(self.cols);
        for &kind in &self.fleet {
            if kind.length() > longest_extent {
                return Err(ConfigError::ShipTooLong(kind));
            }
        }
        Ok(())
    }

    /// Total number of ship cells in the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(|k| k.length()).sum()
    }
}

impl Default for GameConfig {
    /// 10×10 board, the classic five-ship fleet, 50 guesses, no touching
    /// ships.
    fn default() -> Self {
        GameConfig {
            rows: 10,
            cols: 10,
            fleet: ShipKind::ALL.to_vec(),
            max_guesses: 50,
            adjacency: AdjacencyRule::EightNeighbor,
        }
    }
}
