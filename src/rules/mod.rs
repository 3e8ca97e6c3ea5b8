//! Move outcomes and scoring.
//!
//! `MoveResult` is what every move reports back to the caller;
//! `Scoreboard` accumulates finished games across board resets.

pub mod outcome;
pub mod scoreboard;

pub use outcome::{GameResult, MoveResult, MoveStatus, RejectReason};
pub use scoreboard::Scoreboard;
