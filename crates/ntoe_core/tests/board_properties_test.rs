//! Property tests for the board engine.

use ntoe_core::{Board, Cell, GameError, Mark, Winner};
use proptest::prelude::*;

proptest! {
    #[test]
    fn new_board_is_empty_and_not_full(size in 1usize..40) {
        let board = Board::new(size).unwrap();
        prop_assert_eq!(board.cell_count(), size * size);
        prop_assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        prop_assert!(!board.is_full());
        prop_assert_eq!(board.evaluate_win(), Winner::NoWinner);
    }

    #[test]
    fn index_coords_bijection(size in 1usize..30, seed in any::<usize>()) {
        let board = Board::new(size).unwrap();
        let index = seed % board.cell_count();
        let (row, col) = board.coords(index).unwrap();
        prop_assert_eq!(row, index / size);
        prop_assert_eq!(col, index % size);
        prop_assert_eq!(board.index_of(row, col), Some(index));
    }

    #[test]
    fn legality_tracks_emptiness(
        size in 1usize..8,
        moves in proptest::collection::vec(any::<usize>(), 0..64),
    ) {
        let mut board = Board::new(size).unwrap();
        let mut mark = Mark::Player;
        for raw in moves {
            let index = raw % board.cell_count();
            if board.apply_move(index, mark).is_ok() {
                mark = mark.opponent();
            }
            prop_assert_eq!(board.is_legal(index), Ok(false));
        }

        for index in 0..board.cell_count() {
            let empty = board.cell_at(index).unwrap() == Cell::Empty;
            prop_assert_eq!(board.is_legal(index), Ok(empty));
        }
    }

    #[test]
    fn out_of_range_is_an_error(size in 1usize..20, past in 0usize..1000) {
        let board = Board::new(size).unwrap();
        let index = board.cell_count() + past;
        prop_assert_eq!(
            board.is_legal(index),
            Err(GameError::OutOfRange { index, last: size * size - 1 })
        );
    }
}

#[test]
fn test_draw_pattern_is_full_without_winner() {
    let mut board = Board::new(3).unwrap();
    let pattern = [
        Mark::Player, Mark::Computer, Mark::Player,
        Mark::Player, Mark::Computer, Mark::Computer,
        Mark::Computer, Mark::Player, Mark::Player,
    ];
    for (index, mark) in pattern.into_iter().enumerate() {
        board.apply_move(index, mark).unwrap();
    }

    assert_eq!(board.evaluate_win(), Winner::NoWinner);
    assert!(board.is_full());
    assert_eq!(board.to_string(), "X O X\nX O O\nO X X");
}

#[test]
fn test_snapshot_serializes_cells() {
    let mut board = Board::new(2).unwrap();
    board.apply_move(3, Mark::Computer).unwrap();

    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["size"], 2);
    assert_eq!(json["cells"][0], "Empty");
    assert_eq!(json["cells"][3]["Occupied"], "Computer");
}
