use battleship_practice::{apply_shot, is_victory, place_ships, Board, Cell, Orientation, Outcome};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn placed_board(seed: u64, size: usize, lengths: &[usize]) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    place_ships(&mut board, lengths, &mut rng).unwrap();
    board
}

/// Fleets small enough that random placement on a 7x7 board can never get
/// stuck.
fn fleet() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=3, 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_exactly_the_fleet(seed in any::<u64>(), lengths in fleet()) {
        let board = placed_board(seed, 7, &lengths);
        let total: usize = lengths.iter().sum();
        prop_assert_eq!(board.count(Cell::ShipIntact), total);
        prop_assert_eq!(board.remaining_ship_cells(), total);
        prop_assert_eq!(board.count(Cell::Empty), 49 - total);
    }

    #[test]
    fn placed_ships_are_straight_in_bounds_and_disjoint(seed in any::<u64>(), lengths in fleet()) {
        let board = placed_board(seed, 7, &lengths);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), lengths.len());
        let mut seen = [[false; 7]; 7];
        for (ship, &len) in ships.iter().zip(&lengths) {
            prop_assert_eq!(ship.length(), len);
            let (r0, c0) = ship.origin();
            for (i, (r, c)) in ship.cells().enumerate() {
                match ship.orientation() {
                    Orientation::Horizontal => prop_assert_eq!((r, c), (r0, c0 + i)),
                    Orientation::Vertical => prop_assert_eq!((r, c), (r0 + i, c0)),
                }
                prop_assert!(r < 7 && c < 7);
                prop_assert!(!seen[r][c], "overlap at ({}, {})", r, c);
                seen[r][c] = true;
                prop_assert_eq!(board.cell(r, c).unwrap(), Cell::ShipIntact);
            }
        }
    }

    #[test]
    fn shot_is_idempotent(seed in any::<u64>(), row in 0..7usize, col in 0..7usize) {
        let mut board = placed_board(seed, 7, &[5, 4, 3, 3, 2]);
        let before = board.cell(row, col).unwrap();
        let first = apply_shot(&mut board, row, col).unwrap();
        match before {
            Cell::ShipIntact => prop_assert_eq!(first, Outcome::Hit),
            Cell::Empty => prop_assert_eq!(first, Outcome::Miss),
            other => prop_assert!(false, "fresh board had a resolved cell {:?}", other),
        }
        let after_first = board.clone();
        prop_assert_eq!(apply_shot(&mut board, row, col).unwrap(), Outcome::AlreadyResolved);
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn victory_exactly_when_last_segment_hit(seed in any::<u64>()) {
        let mut board = placed_board(seed, 7, &[5, 4, 3, 3, 2]);
        let targets: Vec<(usize, usize)> = board.ships().iter().flat_map(|s| s.cells()).collect();
        for (i, &(r, c)) in targets.iter().enumerate() {
            prop_assert!(!is_victory(&board));
            prop_assert_eq!(apply_shot(&mut board, r, c).unwrap(), Outcome::Hit);
            prop_assert_eq!(is_victory(&board), i + 1 == targets.len());
            prop_assert_eq!(is_victory(&board), board.remaining_ship_cells() == 0);
        }
    }

    #[test]
    fn only_legal_transitions(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..7usize, 0..7usize), 0..80),
    ) {
        let mut board = placed_board(seed, 7, &[5, 4, 3, 3, 2]);
        let initial = board.clone();
        for (r, c) in shots {
            apply_shot(&mut board, r, c).unwrap();
        }
        for r in 0..7 {
            for c in 0..7 {
                let now = board.cell(r, c).unwrap();
                match initial.cell(r, c).unwrap() {
                    Cell::Empty => prop_assert!(matches!(now, Cell::Empty | Cell::Miss)),
                    Cell::ShipIntact => prop_assert!(matches!(now, Cell::ShipIntact | Cell::Hit)),
                    other => prop_assert!(false, "unexpected initial cell {:?}", other),
                }
            }
        }
        prop_assert_eq!(is_victory(&board), board.remaining_ship_cells() == 0);
    }
}
