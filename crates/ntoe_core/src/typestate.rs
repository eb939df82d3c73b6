//! Phase-specific session types for n x n tic-tac-toe.
//!
//! Each phase is its own type. Only [`GameInProgress`] can accept moves,
//! and a [`GameFinished`] always carries a terminal status.

#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{Board, GameError, GameStatus, Mark, Winner};
use serde::Serialize;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game ready to start on an empty board of a validated size.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a game on an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] before any board is allocated
    /// for a zero size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    /// Creates a game from a size as typed by a user, which may be negative.
    #[instrument]
    pub fn try_from_size(size: i64) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::try_from_size(size)?,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game; the human always moves first.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn start(self) -> GameInProgress {
        info!("Game started");
        GameInProgress {
            board: self.board,
            to_move: Mark::Player,
            turn: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - accepts exactly one move per turn.
#[derive(Debug, Clone, Serialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    to_move: Mark,
    turn: usize,
}

impl GameInProgress {
    /// Places the current mover's mark, consuming self.
    ///
    /// After the move the board is evaluated: a completed line ends the
    /// game for the mover, otherwise a full board ends it in a draw,
    /// otherwise the other side is to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] or [`GameError::Occupied`] for an
    /// illegal index. Postconditions are verified in debug builds.
    #[instrument(skip(self), fields(mover = %self.to_move, turn = self.turn))]
    pub fn make_move(mut self, index: usize) -> Result<GameResult, GameError> {
        let mover = self.to_move;
        self.board.apply_move(index, mover)?;
        self.turn += 1;

        let status = GameStatus::evaluate(&self.board);
        if status.is_terminal() {
            info!(?status, turns = self.turn, "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                board: self.board,
                status,
                turns: self.turn,
            }));
        }

        self.to_move = mover.opponent();
        debug!(next = %self.to_move, "Turn passes");

        #[cfg(debug_assertions)]
        SessionInvariants::check_all(&self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        Ok(GameResult::InProgress(self))
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Number of moves applied so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replays a sequence of spots from an empty board.
    #[instrument]
    pub fn replay(size: usize, spots: &[usize]) -> Result<GameResult, GameError> {
        let mut game = GameSetup::new(size)?.start();

        for &spot in spots {
            match game.make_move(spot)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over - no further moves are accepted.
#[derive(Debug, Clone, Serialize)]
pub struct GameFinished {
    board: Board,
    status: GameStatus,
    turns: usize,
}

impl GameFinished {
    /// Terminal status: `PlayerWon`, `ComputerWon`, or `Draw`.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning mark, `None` for a draw.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Starts over, possibly on a board of a different size.
    #[instrument(skip(self))]
    pub fn restart(self, size: usize) -> Result<GameSetup, GameError> {
        GameSetup::new(size)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameStatus {
    /// Evaluates a board: a win first, then a full board, else in progress.
    pub fn evaluate(board: &Board) -> Self {
        match board.evaluate_win() {
            Winner::PlayerWins => GameStatus::PlayerWon,
            Winner::ComputerWins => GameStatus::ComputerWon,
            Winner::NoWinner if board.is_full() => GameStatus::Draw,
            Winner::NoWinner => GameStatus::InProgress,
        }
    }
}
