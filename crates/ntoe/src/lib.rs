//! Console n x n tic-tac-toe.
//!
//! The driver around [`ntoe_core`]: settings, terminal prompts, the two
//! players, and the replay loop.
//!
//! # Architecture
//!
//! - **Console**: prompts and board output over any reader/writer
//! - **Players**: the human (console input) and the computer (random moves)
//! - **Referee**: alternates the players through one game and replays on request

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod players;
mod referee;

pub use cli::Cli;
pub use config::{ConfigError, Settings};
pub use console::Console;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use referee::{play_game, run, Summary};
