//! Random ship placement by rejection sampling.
//!
//! Each ship draws a uniform anchor cell and a uniform orientation, and the
//! draw is retried until the whole run lands on empty in-bounds cells. Ships
//! are placed independently in the order given; there is no backtracking, so
//! ships placed into a fuller board need more attempts.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::ship::Orientation;

/// A chosen anchor and orientation for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    /// Draws needed to find this placement, including the successful one.
    pub attempts: usize,
}

/// Draw one candidate: anchor row, anchor column, then orientation.
fn sample<R: Rng>(rng: &mut R, size: usize) -> (usize, usize, Orientation) {
    let row = rng.random_range(0..size);
    let col = rng.random_range(0..size);
    let orientation = if rng.random::<bool>() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    (row, col, orientation)
}

/// Search for a valid placement of `length`, giving up after `max_attempts`
/// draws when a limit is set.
fn search<R: Rng>(
    board: &Board,
    length: usize,
    rng: &mut R,
    max_attempts: Option<usize>,
) -> Result<Placement, BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidShipLength);
    }
    let mut attempts = 0;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(BoardError::UnableToPlaceShip { length, attempts });
        }
        attempts += 1;
        let (row, col, orientation) = sample(rng, board.size());
        if board.can_place(row, col, orientation, length) {
            return Ok(Placement {
                row,
                col,
                orientation,
                attempts,
            });
        }
    }
}

/// Find a random non-overlapping placement for a ship of `length`.
///
/// Retries without limit: if the ship cannot fit anywhere this never
/// returns.
pub fn random_placement<R: Rng>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    search(board, length, rng, None)
}

/// Like [`random_placement`] but fails with
/// [`BoardError::UnableToPlaceShip`] after `max_attempts` rejected draws.
pub fn try_random_placement<R: Rng>(
    board: &Board,
    length: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Placement, BoardError> {
    search(board, length, rng, Some(max_attempts))
}

/// Place every ship in `lengths`, in order, at random positions.
///
/// The caller must make sure the fleet fits; there is no capacity check and
/// an impossible fleet makes this loop forever. A zero length is rejected
/// before anything further is placed.
pub fn place_ships<R: Rng>(
    board: &mut Board,
    lengths: &[usize],
    rng: &mut R,
) -> Result<(), BoardError> {
    for &length in lengths {
        let p = random_placement(board, length, rng)?;
        commit(board, length, p)?;
    }
    Ok(())
}

/// Bounded counterpart of [`place_ships`]. Ships placed before a failure
/// stay on the board.
pub fn try_place_ships<R: Rng>(
    board: &mut Board,
    lengths: &[usize],
    rng: &mut R,
    max_attempts: usize,
) -> Result<(), BoardError> {
    for &length in lengths {
        let p = try_random_placement(board, length, rng, max_attempts)?;
        commit(board, length, p)?;
    }
    Ok(())
}

fn commit(board: &mut Board, length: usize, p: Placement) -> Result<(), BoardError> {
    debug!(
        "placed ship of length {} at ({}, {}) {:?} after {} attempts",
        length, p.row, p.col, p.orientation, p.attempts
    );
    board.place_ship(p.row, p.col, p.orientation, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_fleet_fills_seventeen_cells() {
        let mut board = Board::new(7).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        place_ships(&mut board, &[5, 4, 3, 3, 2], &mut rng).unwrap();
        assert_eq!(board.count(Cell::ShipIntact), 17);
        assert_eq!(board.remaining_ship_cells(), 17);
        let lengths: alloc::vec::Vec<_> = board.ships().iter().map(|s| s.length()).collect();
        assert_eq!(lengths, [5, 4, 3, 3, 2]);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Board::new(7).unwrap();
        let mut b = Board::new(7).unwrap();
        place_ships(&mut a, &[5, 4, 3], &mut SmallRng::seed_from_u64(7)).unwrap();
        place_ships(&mut b, &[5, 4, 3], &mut SmallRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_cell_board_takes_one_ship() {
        let mut board = Board::new(1).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        place_ships(&mut board, &[1], &mut rng).unwrap();
        assert_eq!(board.cell(0, 0).unwrap(), Cell::ShipIntact);
    }

    #[test]
    fn bounded_search_gives_up_when_full() {
        let mut board = Board::new(2).unwrap();
        board.place_ship(0, 0, Orientation::Horizontal, 2).unwrap();
        board.place_ship(1, 0, Orientation::Horizontal, 2).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            try_random_placement(&board, 1, &mut rng, 50),
            Err(BoardError::UnableToPlaceShip {
                length: 1,
                attempts: 50
            })
        );
    }

    #[test]
    fn bounded_default_budget_places_default_fleet() {
        use crate::config::{DEFAULT_MAX_ATTEMPTS, SHIP_LENGTHS};
        let mut board = Board::new(7).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        try_place_ships(&mut board, &SHIP_LENGTHS, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(board.remaining_ship_cells(), 17);
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut board = Board::new(3).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(
            place_ships(&mut board, &[0], &mut rng),
            Err(BoardError::InvalidShipLength)
        );
    }

    #[test]
    fn attempts_are_counted() {
        let board = Board::new(7).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        let p = random_placement(&board, 1, &mut rng).unwrap();
        // any anchor fits a length-1 ship on an empty board
        assert_eq!(p.attempts, 1);
    }
}
