//! Commonly used types and functions for ease of import.

pub use crate::{
    apply_shot, create_board, is_victory, place_ships, Board, Cell, CellView, GameConfig,
    GameSession, Outcome, SessionStatus, ShotReport,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
