//! Invariants that hold for every game still in progress.
//!
//! They are checked after each continuing move in debug builds and can be
//! tested on their own.

use crate::typestate::GameInProgress;
use crate::Mark;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The player moves first, so they hold as many marks as the computer or one more.
pub struct MarkBalance;

impl Invariant<GameInProgress> for MarkBalance {
    fn holds(game: &GameInProgress) -> bool {
        let player = game.board().count(Mark::Player);
        let computer = game.board().count(Mark::Computer);
        let valid = player == computer || player == computer + 1;
        if !valid {
            warn!(player, computer, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Player marks must equal computer marks or exceed them by one"
    }
}

/// The side to move is determined by how many marks are on the board.
pub struct TurnParity;

impl Invariant<GameInProgress> for TurnParity {
    fn holds(game: &GameInProgress) -> bool {
        let placed = game.board().cell_count() - game.board().empty_cells().count();
        let expected = if placed % 2 == 0 {
            Mark::Player
        } else {
            Mark::Computer
        };
        let valid = game.to_move() == expected && game.turn() == placed;
        if !valid {
            warn!(placed, turn = game.turn(), to_move = %game.to_move(), "Turn parity violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Player moves on even turns, computer on odd turns"
    }
}

/// All invariants of a game in progress.
pub type SessionInvariants = (MarkBalance, TurnParity);
