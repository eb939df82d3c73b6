//! Game rules for n x n tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the session and the tests can evaluate positions directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::evaluate_win;
