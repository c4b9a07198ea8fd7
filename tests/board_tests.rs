use battleship_practice::{
    apply_shot, create_board, is_victory, Board, BoardError, Cell, CellView, Orientation, Outcome,
};

#[test]
fn test_create_board_all_empty() {
    for n in 1..=12 {
        let board = create_board(n).unwrap();
        assert_eq!(board.size(), n);
        assert_eq!(board.rows().count(), n);
        for row in board.rows() {
            assert_eq!(row.len(), n);
            assert!(row.iter().all(|&c| c == Cell::Empty));
        }
    }
    assert_eq!(create_board(0).unwrap_err(), BoardError::InvalidSize);
}

#[test]
fn test_three_by_three_scenario() {
    let mut board = Board::new(3).unwrap();
    board.place_ship(0, 0, Orientation::Horizontal, 3).unwrap();
    for c in 0..3 {
        assert_eq!(board.cell(0, c).unwrap(), Cell::ShipIntact);
    }

    assert_eq!(apply_shot(&mut board, 1, 0).unwrap(), Outcome::Miss);
    assert_eq!(apply_shot(&mut board, 0, 0).unwrap(), Outcome::Hit);
    assert!(!is_victory(&board));
    assert_eq!(apply_shot(&mut board, 0, 1).unwrap(), Outcome::Hit);
    assert!(!is_victory(&board));
    assert_eq!(apply_shot(&mut board, 0, 2).unwrap(), Outcome::Hit);
    assert!(is_victory(&board));
}

#[test]
fn test_repeat_shot_is_already_resolved() {
    let mut board = Board::new(3).unwrap();
    board.place_ship(0, 0, Orientation::Horizontal, 3).unwrap();

    assert_eq!(apply_shot(&mut board, 0, 0).unwrap(), Outcome::Hit);
    let after_first = board.clone();
    assert_eq!(
        apply_shot(&mut board, 0, 0).unwrap(),
        Outcome::AlreadyResolved
    );
    assert_eq!(board, after_first);

    assert_eq!(apply_shot(&mut board, 2, 2).unwrap(), Outcome::Miss);
    let after_miss = board.clone();
    assert_eq!(
        apply_shot(&mut board, 2, 2).unwrap(),
        Outcome::AlreadyResolved
    );
    assert_eq!(board, after_miss);
}

#[test]
fn test_out_of_range_shot_fails_fast() {
    let mut board = Board::new(3).unwrap();
    assert_eq!(
        apply_shot(&mut board, 3, 1).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 1 }
    );
    assert_eq!(board.count(Cell::Empty), 9);
}

#[test]
fn test_view_only_exposes_resolved_cells() {
    let mut board = Board::new(4).unwrap();
    board.place_ship(1, 1, Orientation::Vertical, 2).unwrap();
    apply_shot(&mut board, 1, 1).unwrap();
    apply_shot(&mut board, 0, 0).unwrap();

    for r in 0..4 {
        for c in 0..4 {
            let expected = match (r, c) {
                (1, 1) => CellView::Hit,
                (0, 0) => CellView::Miss,
                _ => CellView::Unknown,
            };
            assert_eq!(board.view(r, c).unwrap(), expected);
        }
    }
}
