//! Pure n x n tic-tac-toe game logic.
//!
//! The human (`X`) always moves first against a computer (`O`) that plays
//! uniformly random legal moves. A side wins by filling any full row,
//! column, or either main diagonal of the board.
//!
//! # Example
//!
//! ```
//! use ntoe_core::{GameResult, GameSetup, GameStatus};
//!
//! let game = GameSetup::new(1).unwrap().start();
//! match game.make_move(0).unwrap() {
//!     GameResult::Finished(done) => assert_eq!(done.status(), GameStatus::PlayerWon),
//!     GameResult::InProgress(_) => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
pub mod rules;
mod selector;
mod typestate;
mod types;

pub use board::Board;
pub use error::GameError;
pub use selector::choose_move;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Cell, GameStatus, Mark, Winner};
