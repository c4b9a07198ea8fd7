//! Common types for the board core: shot outcomes and board errors.

use core::fmt;

/// Result of resolving a shot against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shot landed on an intact ship segment.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Cell was already targeted; the board is unchanged.
    AlreadyResolved,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board side length is zero or the cells cannot be allocated.
    InvalidSize,
    /// Row or column is outside `[0, size)`.
    OutOfBounds { row: usize, col: usize },
    /// Ship run extends past the board edge.
    ShipOutOfBounds,
    /// Ship run crosses a cell that is not empty.
    ShipOverlaps,
    /// Zero-length ship.
    InvalidShipLength,
    /// Bounded placement gave up on a ship.
    UnableToPlaceShip { length: usize, attempts: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize => write!(f, "Board size is zero or too large"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::UnableToPlaceShip { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
