//! Full-board detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate_win;
    use super::*;
    use crate::{Mark, Winner};

    fn fill(board: &mut Board, pattern: &str) {
        for (index, symbol) in pattern.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match symbol {
                'X' => board.apply_move(index, Mark::Player).unwrap(),
                'O' => board.apply_move(index, Mark::Computer).unwrap(),
                _ => {}
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, "XOX OX- ---");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_classic_draw() {
        let mut board = Board::new(3).unwrap();
        fill(&mut board, "XOX XOO OXX");
        assert!(is_full(&board));
        assert_eq!(evaluate_win(&board), Winner::NoWinner);
    }

    #[test]
    fn test_single_cell_board_full_after_one_move() {
        let mut board = Board::new(1).unwrap();
        board.apply_move(0, Mark::Player).unwrap();
        assert!(is_full(&board));
    }
}
