//! Win detection: the game is over once no intact ship cell remains.

use crate::board::{Board, Cell};

/// `true` when no `ShipIntact` cell remains on the board.
pub fn is_victory(board: &Board) -> bool {
    board
        .rows()
        .all(|row| row.iter().all(|&cell| cell != Cell::ShipIntact))
}
