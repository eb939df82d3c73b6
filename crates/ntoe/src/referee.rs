//! Runs games between the human and the computer.

use crate::config::Settings;
use crate::console::Console;
use crate::players::{HumanPlayer, Player};
use anyhow::Result;
use ntoe_core::{GameFinished, GameResult, GameSetup, GameStatus, Mark};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Tally of finished games in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Games the human won.
    pub player_wins: usize,
    /// Games the computer won.
    pub computer_wins: usize,
    /// Games that filled the board.
    pub draws: usize,
}

impl Summary {
    /// Total number of finished games.
    pub fn games(&self) -> usize {
        self.player_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::PlayerWon => self.player_wins += 1,
            GameStatus::ComputerWon => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Plays one game to its end.
///
/// The board is shown before every half-move and once more with the
/// result when the game ends.
#[instrument(skip_all, fields(size = setup.board().size(), human = human.name(), computer = computer.name()))]
pub fn play_game<H, C, R, W>(
    setup: GameSetup,
    human: &mut H,
    computer: &mut C,
    console: &mut Console<R, W>,
) -> Result<GameFinished>
where
    H: Player,
    C: Player,
    R: BufRead,
    W: Write,
{
    let mut game = setup.start();
    loop {
        console.show_board(game.board())?;

        let index = match game.to_move() {
            Mark::Player => human.choose_move(game.board(), console)?,
            Mark::Computer => computer.choose_move(game.board(), console)?,
        };
        debug!(index, mover = %game.to_move(), turn = game.turn(), "Applying move");

        game = match game.make_move(index)? {
            GameResult::InProgress(next) => next,
            GameResult::Finished(done) => {
                console.show_board(done.board())?;
                console.announce(&done)?;
                return Ok(done);
            }
        };
    }
}

/// Plays games until the human declines a rematch.
///
/// The board size comes from the settings when one is configured, and
/// is asked for before each game otherwise.
#[instrument(skip_all)]
pub fn run<C, R, W>(
    settings: &Settings,
    console: &mut Console<R, W>,
    computer: &mut C,
) -> Result<Summary>
where
    C: Player,
    R: BufRead,
    W: Write,
{
    let fixed_size = match settings.board_size() {
        Ok(size) => size,
        Err(e) => {
            warn!(error = %e, "Ignoring configured board size");
            console.say(&e.to_string())?;
            None
        }
    };

    let mut human = HumanPlayer::default();
    let mut summary = Summary::default();
    loop {
        let setup = match fixed_size {
            Some(size) => GameSetup::new(size)?,
            None => console.prompt_size()?,
        };
        info!(size = setup.board().size(), game = summary.games() + 1, "New game");

        let done = play_game(setup, &mut human, computer, console)?;
        summary.record(done.status());
        info!(status = ?done.status(), turns = done.turns(), "Game over");

        if !console.prompt_replay()? {
            break;
        }
    }

    info!(?summary, "Session finished");
    Ok(summary)
}
