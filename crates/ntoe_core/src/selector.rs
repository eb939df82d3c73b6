//! Random move selection for the computer opponent.

use crate::{Board, GameError};
use rand::Rng;
use tracing::{instrument, trace};

/// Picks an empty cell uniformly at random.
///
/// Samples indices uniformly from `[0, n*n)` and rejects occupied cells
/// until an empty one turns up, which is uniform over the empty cells.
///
/// # Errors
///
/// Returns [`GameError::BoardFull`] when there is nothing left to play.
#[instrument(skip_all, fields(size = board.size()))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, GameError> {
    if board.is_full() {
        return Err(GameError::BoardFull);
    }

    let mut rejected = 0usize;
    loop {
        let index = rng.gen_range(0..board.cell_count());
        if board.is_legal(index)? {
            trace!(index, rejected, "Computer picked a spot");
            return Ok(index);
        }
        rejected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_empty_cell_always_chosen() {
        let mut board = Board::new(3).unwrap();
        for index in (0..9).filter(|&i| i != 5) {
            board.apply_move(index, Mark::Computer).unwrap();
        }

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(choose_move(&board, &mut rng), Ok(5));
        }
    }

    #[test]
    fn test_full_board_rejected() {
        let mut board = Board::new(1).unwrap();
        board.apply_move(0, Mark::Player).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(choose_move(&board, &mut rng), Err(GameError::BoardFull));
    }

    #[test]
    fn test_choice_is_always_legal() {
        let mut board = Board::new(4).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut mark = Mark::Player;
        while !board.is_full() {
            let index = choose_move(&board, &mut rng).unwrap();
            assert_eq!(board.is_legal(index), Ok(true));
            board.apply_move(index, mark).unwrap();
            mark = mark.opponent();
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new(6).unwrap();
        let first = choose_move(&board, &mut ChaCha8Rng::seed_from_u64(9));
        let second = choose_move(&board, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(0, Mark::Player).unwrap();
        board.apply_move(8, Mark::Computer).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [0u32; 9];
        for _ in 0..7000 {
            seen[choose_move(&board, &mut rng).unwrap()] += 1;
        }

        assert_eq!(seen[0], 0);
        assert_eq!(seen[8], 0);
        for &hits in &seen[1..8] {
            // 1000 expected per cell
            assert!((800..1200).contains(&hits), "skewed sample: {:?}", seen);
        }
    }
}
