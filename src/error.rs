//! Engine errors.
//!
//! Only caller mistakes end up here. A bad user click is a
//! `MoveStatus::Rejected`, not an error.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `computer_move` was called with no empty cell left.
    #[error("no empty cell left for the computer to play")]
    NoEmptyCells,

    /// `computer_move` was called after a line was completed.
    #[error("game is already over; reset the board first")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, EngineError>;
