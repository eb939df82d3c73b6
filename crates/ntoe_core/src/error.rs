//! Error type for board and session operations.

/// Error raised by the board engine or the session state machine.
///
/// None of these are fatal: callers recover by asking for another
/// index (human input) or drawing another sample (computer moves).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Requested board size is zero, negative, or too large to allocate.
    #[display("Board size must be a positive integer, got {}", _0)]
    InvalidSize(i128),

    /// Linear index lies outside `[0, n*n)`.
    #[display("Spot {} is off the board (valid spots are 0-{})", index, last)]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Highest valid index, `n*n - 1`.
        last: usize,
    },

    /// The cell at the index already holds a mark.
    #[display("Spot {} is already taken", _0)]
    Occupied(usize),

    /// No empty cell is left to play.
    #[display("Board is full")]
    BoardFull,

    /// A session invariant failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Returns true for errors that mean "pick another spot".
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::OutOfRange { .. } | GameError::Occupied(_))
    }
}
