//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use ntoe_core::Board;
use std::io::{BufRead, Write};

/// Trait for players that can pick a spot.
pub trait Player {
    /// Returns a legal linear index for the next move.
    ///
    /// Only called while the board has an empty cell.
    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
