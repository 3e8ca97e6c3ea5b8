//! Session scores.

use serde::{Deserialize, Serialize};

use super::outcome::GameResult;
use crate::core::Mark;

/// Win and draw counters for the current session.
///
/// Counters only ever go up. Board resets leave them alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(Mark::X) => self.x_wins += 1,
            GameResult::Winner(Mark::O) => self.o_wins += 1,
            GameResult::Winner(Mark::Empty) => {}
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Wins recorded for `mark`.
    #[must_use]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }

    /// Total finished games.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X Wins: {} | O Wins: {} | Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
