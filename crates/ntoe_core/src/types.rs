//! Core domain types for n x n tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark placed on the board by one of the two sides.
///
/// Symbols are fixed: the human plays `X`, the computer plays `O`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// The human player (moves first).
    #[strum(serialize = "X")]
    Player,
    /// The computer opponent (moves second).
    #[strum(serialize = "O")]
    Computer,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark for the rest of the game.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "-"),
            Cell::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// Result of scanning the board for a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// No row, column, or diagonal is fully marked by one side.
    NoWinner,
    /// The human completed a line.
    PlayerWins,
    /// The computer completed a line.
    ComputerWins,
}

impl Winner {
    /// Returns the winning mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Winner::NoWinner => None,
            Winner::PlayerWins => Some(Mark::Player),
            Winner::ComputerWins => Some(Mark::Computer),
        }
    }
}

impl From<Mark> for Winner {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Player => Winner::PlayerWins,
            Mark::Computer => Winner::ComputerWins,
        }
    }
}

/// Status of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The human won.
    PlayerWon,
    /// The computer won.
    ComputerWon,
    /// The board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark for a won game.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::PlayerWon => Some(Mark::Player),
            GameStatus::ComputerWon => Some(Mark::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
