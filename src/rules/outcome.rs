//! Results reported by move application.
//!
//! A rejected move is a normal result, not an error: the caller simply
//! re-renders the current state.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A line was completed by this mark.
    Winner(Mark),
    /// Board filled with no line.
    Draw,
}

/// Why a move was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Row or column outside `0..3`.
    OutOfBounds,
    /// The cell already holds a mark.
    Occupied,
    /// The board already has a completed line.
    GameOver,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::OutOfBounds => write!(f, "cell is off the board"),
            RejectReason::Occupied => write!(f, "cell is already occupied"),
            RejectReason::GameOver => write!(f, "game is already over"),
        }
    }
}

/// What happened to the game after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    /// Move ignored; no state changed.
    Rejected(RejectReason),
    /// Game continues; carries the mark to move next.
    Continue(Mark),
    /// The mark just placed completed a line.
    Win(Mark),
    /// The board is full with no line.
    Draw,
}

impl MoveStatus {
    /// The game result if this move ended the game.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        match *self {
            MoveStatus::Win(mark) => Some(GameResult::Winner(mark)),
            MoveStatus::Draw => Some(GameResult::Draw),
            MoveStatus::Rejected(_) | MoveStatus::Continue(_) => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.game_result().is_some()
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveStatus::Rejected(_))
    }

    /// Player-facing text for this status.
    ///
    /// Rejected moves have no message; the caller just redraws.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            MoveStatus::Rejected(_) => None,
            MoveStatus::Continue(next) => Some(format!("Player {}'s turn", next)),
            MoveStatus::Win(mark) => Some(format!("Player {} wins!", mark)),
            MoveStatus::Draw => Some("It's a draw!".to_string()),
        }
    }
}

/// Outcome of `GameEngine::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    pub status: MoveStatus,

    /// Set when single-player mode is active and O moves next.
    /// The presentation layer should schedule `computer_move`.
    pub computer_turn_pending: bool,
}

impl MoveResult {
    #[must_use]
    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            status: MoveStatus::Rejected(reason),
            computer_turn_pending: false,
        }
    }

    #[must_use]
    pub fn new(status: MoveStatus, computer_turn_pending: bool) -> Self {
        Self {
            status,
            computer_turn_pending,
        }
    }
}
