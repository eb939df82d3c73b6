//! Human player reading spots from the console.

use super::Player;
use crate::console::Console;
use anyhow::Result;
use ntoe_core::Board;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player; re-prompts until a legal spot is entered.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("Player")
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<usize> {
        let index = console.prompt_spot(board)?;
        debug!(index, "Human chose spot");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
