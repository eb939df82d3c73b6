//! The n x n board and its move-legality rules.

use crate::error::GameError;
use crate::rules;
use crate::types::{Cell, Mark, Winner};
use serde::Serialize;
use tracing::{debug, instrument};

/// Square n x n grid of cells addressed by a row-major linear index.
///
/// Index `i` maps to `(i / n, i % n)`; spots are numbered `0..n*n`
/// left to right, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] for a zero size or a size whose
    /// cells cannot be allocated.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidSize(size as i128);
        let count = Self::cell_count_for(size).ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| invalid())?;
        cells.resize(count, Cell::Empty);

        debug!(size, cells = count, "Creating board");
        Ok(Self { size, cells })
    }

    /// Creates a board from a size as typed by a user, which may be negative.
    #[instrument]
    pub fn try_from_size(size: i64) -> Result<Self, GameError> {
        Self::new(Self::check_size(size)?)
    }

    /// Checks a requested size without allocating a board.
    pub fn check_size(size: i64) -> Result<usize, GameError> {
        usize::try_from(size)
            .ok()
            .filter(|&n| Self::cell_count_for(n).is_some())
            .ok_or(GameError::InvalidSize(size.into()))
    }

    fn cell_count_for(size: usize) -> Option<usize> {
        if size == 0 {
            return None;
        }
        size.checked_mul(size)
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, `n * n`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at a linear index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `index >= n * n`.
    pub fn cell_at(&self, index: usize) -> Result<Cell, GameError> {
        self.cells.get(index).copied().ok_or(GameError::OutOfRange {
            index,
            last: self.cells.len() - 1,
        })
    }

    /// Returns the cell at grid coordinates, if they are on the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Maps a linear index to `(row, col)`.
    pub fn coords(&self, index: usize) -> Result<(usize, usize), GameError> {
        self.cell_at(index)?;
        Ok((index / self.size, index % self.size))
    }

    /// Maps `(row, col)` back to a linear index.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    /// Whether a move at `index` would be accepted.
    ///
    /// `Ok(false)` means the cell is occupied; an index off the board is an
    /// error rather than a plain `false`.
    pub fn is_legal(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.cell_at(index)? == Cell::Empty)
    }

    /// Same predicate as [`Board::is_legal`], with the reason for rejection.
    pub fn validate(&self, index: usize) -> Result<(), GameError> {
        if self.is_legal(index)? {
            Ok(())
        } else {
            Err(GameError::Occupied(index))
        }
    }

    /// Places `mark` at `index`.
    ///
    /// The board is left untouched when the move is illegal.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        self.validate(index)?;
        self.cells[index] = Cell::Occupied(mark);
        debug!(index, %mark, "Mark placed");
        Ok(())
    }

    /// Scans for a completed line.
    pub fn evaluate_win(&self) -> Winner {
        rules::evaluate_win(self)
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
