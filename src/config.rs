//! Game configuration: board side length and the ordered list of ship lengths.

use alloc::vec::Vec;
use core::fmt;

/// Default side length of the square board.
pub const BOARD_SIZE: usize = 7;

/// Default fleet, placed in this order.
pub const SHIP_LENGTHS: [usize; 5] = [5, 4, 3, 3, 2];

/// Rejection budget per ship for [`crate::try_place_ships`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Errors found while validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side length is zero, or its cell count overflows `usize`.
    InvalidBoardSize,
    /// At least one ship is required for the game to be winnable.
    NoShips,
    /// A ship is zero-length or longer than the board side.
    InvalidShipLength { length: usize },
    /// The fleet has more cells than the board.
    InsufficientCapacity { required: usize, available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize => write!(f, "Board size is zero or too large"),
            ConfigError::NoShips => write!(f, "At least one ship length is required"),
            ConfigError::InvalidShipLength { length } => {
                write!(f, "Ship length {} does not fit on the board", length)
            }
            ConfigError::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                required, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Board size and fleet for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_lengths: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            ship_lengths: SHIP_LENGTHS.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, ship_lengths: Vec<usize>) -> Self {
        Self {
            board_size,
            ship_lengths,
        }
    }

    /// Total number of ship cells in the fleet, saturating at `usize::MAX`.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths
            .iter()
            .fold(0usize, |acc, &len| acc.saturating_add(len))
    }

    /// Reject configurations that can never be placed.
    ///
    /// Passing validation does not bound how long random placement takes; a
    /// tightly packed fleet may still need many attempts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::InvalidBoardSize);
        }
        if self.ship_lengths.is_empty() {
            return Err(ConfigError::NoShips);
        }
        if let Some(&length) = self
            .ship_lengths
            .iter()
            .find(|&&len| len == 0 || len > self.board_size)
        {
            return Err(ConfigError::InvalidShipLength { length });
        }
        let available = self
            .board_size
            .checked_mul(self.board_size)
            .ok_or(ConfigError::InvalidBoardSize)?;
        let required = self.total_ship_cells();
        if required > available {
            return Err(ConfigError::InsufficientCapacity {
                required,
                available,
            });
        }
        Ok(())
    }
}
