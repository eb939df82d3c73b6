//! Win detection for n-in-a-row on an n x n board.

use crate::{Board, Cell, Winner};
use tracing::{instrument, trace};

/// Checks whether one side has marked a whole line.
///
/// Lines are scanned in a fixed order: rows, columns, the primary
/// diagonal `(i, i)`, then the anti-diagonal `(n-1-i, i)`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate_win(board: &Board) -> Winner {
    let n = board.size();

    for row in 0..n {
        if let Some(winner) = line_winner(board, (0..n).map(|col| (row, col))) {
            trace!(row, "Row complete");
            return winner;
        }
    }

    for col in 0..n {
        if let Some(winner) = line_winner(board, (0..n).map(|row| (row, col))) {
            trace!(col, "Column complete");
            return winner;
        }
    }

    if let Some(winner) = line_winner(board, (0..n).map(|i| (i, i))) {
        trace!("Diagonal complete");
        return winner;
    }

    if let Some(winner) = line_winner(board, (0..n).map(|i| (n - 1 - i, i))) {
        trace!("Anti-diagonal complete");
        return winner;
    }

    Winner::NoWinner
}

/// Returns the winner if every cell on the line holds the same mark.
///
/// A line whose first cell is empty never wins.
fn line_winner(board: &Board, mut line: impl Iterator<Item = (usize, usize)>) -> Option<Winner> {
    let (row, col) = line.next()?;
    let mark = match board.get(row, col)? {
        Cell::Empty => return None,
        Cell::Occupied(mark) => mark,
    };

    line.all(|(row, col)| board.get(row, col) == Some(Cell::Occupied(mark)))
        .then(|| Winner::from(mark))
}
