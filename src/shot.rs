//! Shot resolution: the only place cells change once play has started.

use log::trace;

use crate::board::{Board, Cell};
use crate::common::{BoardError, Outcome};

/// Resolve a shot at (`row`, `col`).
///
/// `ShipIntact` becomes `Hit`, `Empty` becomes `Miss`. A cell that was
/// already targeted is left untouched and reports
/// [`Outcome::AlreadyResolved`]. Out-of-range coordinates are an error and
/// do not modify the board.
pub fn apply_shot(board: &mut Board, row: usize, col: usize) -> Result<Outcome, BoardError> {
    let outcome = match board.cell(row, col)? {
        Cell::ShipIntact => {
            board.set(row, col, Cell::Hit)?;
            Outcome::Hit
        }
        Cell::Empty => {
            board.set(row, col, Cell::Miss)?;
            Outcome::Miss
        }
        Cell::Hit | Cell::Miss => Outcome::AlreadyResolved,
    };
    trace!("shot at ({}, {}) -> {:?}", row, col, outcome);
    Ok(outcome)
}
