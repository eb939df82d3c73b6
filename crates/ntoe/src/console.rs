//! Terminal input and output for a game session.
//!
//! Works over any reader and writer so whole sessions can be scripted
//! in tests.

use anyhow::Result;
use derive_new::new;
use ntoe_core::{Board, GameFinished, GameSetup, GameStatus};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Prompts, board rendering, and announcements.
#[derive(Debug, new)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks for a board size until a usable one is entered.
    #[instrument(skip(self))]
    pub fn prompt_size(&mut self) -> Result<GameSetup> {
        loop {
            let answer = self.prompt("Enter the size of the board (3 for a 3x3 board): ")?;
            let Ok(size) = answer.trim().parse::<i64>() else {
                warn!(answer = %answer.trim(), "Board size is not a number");
                self.say(&format!("'{}' is not a whole number", answer.trim()))?;
                continue;
            };

            match GameSetup::try_from_size(size) {
                Ok(setup) => return Ok(setup),
                Err(e) => {
                    warn!(size, error = %e, "Board size rejected");
                    self.say(&e.to_string())?;
                }
            }
        }
    }

    /// Asks for a spot until the board accepts it.
    #[instrument(skip_all, fields(size = board.size()))]
    pub fn prompt_spot(&mut self, board: &Board) -> Result<usize> {
        let last = board.cell_count() - 1;
        loop {
            let answer = self.prompt(&format!(
                "Enter the spot you want to place your piece in (0-{}): ",
                last
            ))?;
            let Ok(index) = answer.trim().parse::<usize>() else {
                warn!(answer = %answer.trim(), "Spot is not a number");
                self.say(&format!("'{}' is not a spot number", answer.trim()))?;
                continue;
            };

            match board.validate(index) {
                Ok(()) => return Ok(index),
                Err(e) => {
                    warn!(index, error = %e, "Illegal move");
                    self.say(&e.to_string())?;
                }
            }
        }
    }

    /// Asks whether to play another game.
    ///
    /// Anything not starting with `n`/`N` means yes. End of input means no.
    #[instrument(skip(self))]
    pub fn prompt_replay(&mut self) -> Result<bool> {
        self.write_prompt("Would you like to play again? ")?;
        let again = match self.read_line() {
            Ok(answer) => !answer
                .trim()
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&'n')),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
            Err(e) => return Err(e.into()),
        };
        writeln!(self.output)?;
        debug!(again, "Replay answer");
        Ok(again)
    }

    /// Prints the board framed by blank lines.
    pub fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", board)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints the end-of-game message.
    #[instrument(skip_all, fields(status = ?finished.status()))]
    pub fn announce(&mut self, finished: &GameFinished) -> Result<()> {
        let message = match finished.status() {
            GameStatus::PlayerWon | GameStatus::ComputerWon => {
                let size = finished.board().size();
                let mark = finished.winner().map(|m| m.to_string()).unwrap_or_default();
                format!("Tic-Tac-Toe. {} in a row! {} wins!", size, mark)
            }
            GameStatus::Draw | GameStatus::InProgress => "There is no winner here.".to_string(),
        };
        self.say(&message)
    }

    /// Prints one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.write_prompt(text)?;
        Ok(self.read_line()?)
    }

    fn write_prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }
}
