//! Computer player picking uniformly random empty cells.

use super::Player;
use crate::console::Console;
use anyhow::Result;
use derive_new::new;
use ntoe_core::Board;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Computer opponent with no strategy beyond random legal moves.
#[derive(Debug, new)]
pub struct ComputerPlayer<G> {
    rng: G,
    #[new(value = "\"Computer\".to_string()")]
    name: String,
}

impl<G: Rng> Player for ComputerPlayer<G> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        _console: &mut Console<R, W>,
    ) -> Result<usize> {
        let index = ntoe_core::choose_move(board, &mut self.rng)?;
        debug!(index, "Computer chose spot");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
