//! Computer move selection.
//!
//! Policies are trait-based so a caller can swap in its own opponent:
//! - `RandomPolicy`: uniform choice among empty cells (Easy)
//! - `BlockingPolicy`: block the human's immediate win, else random (Regular)
//!
//! Neither policy plays offensively or searches past one ply.

use tracing::trace;

use crate::core::{Board, Cell, Difficulty, GameRng, Mark, HUMAN_MARK};

/// Policy for choosing the computer's cell.
pub trait ComputerPolicy: Send + Sync {
    /// Pick an empty cell, or `None` if the board is full.
    fn select(&self, board: &Board, rng: &mut GameRng) -> Option<Cell>;
}

/// Uniformly random empty cell.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl ComputerPolicy for RandomPolicy {
    fn select(&self, board: &Board, rng: &mut GameRng) -> Option<Cell> {
        let empty: Vec<Cell> = board.empty_cells().collect();
        rng.choose(&empty).copied()
    }
}

/// One-ply blocking heuristic.
///
/// Scans empty cells in row-major order and takes the first one where
/// the opponent's mark would complete a line. Falls back to
/// `RandomPolicy` when there is nothing to block.
#[derive(Clone, Debug)]
pub struct BlockingPolicy {
    /// Mark whose wins are blocked.
    pub opponent: Mark,
}

impl Default for BlockingPolicy {
    fn default() -> Self {
        Self {
            opponent: HUMAN_MARK,
        }
    }
}

impl BlockingPolicy {
    /// First row-major cell where `opponent` would complete a line.
    #[must_use]
    pub fn blocking_cell(&self, board: &Board) -> Option<Cell> {
        board
            .empty_cells()
            .find(|&cell| board.completes_line(cell, self.opponent))
    }
}

impl ComputerPolicy for BlockingPolicy {
    fn select(&self, board: &Board, rng: &mut GameRng) -> Option<Cell> {
        match self.blocking_cell(board) {
            Some(cell) => {
                trace!(%cell, opponent = %self.opponent, "blocking threat");
                Some(cell)
            }
            None => RandomPolicy.select(board, rng),
        }
    }
}

/// The built-in policy for a difficulty level.
#[must_use]
pub fn policy_for(difficulty: Difficulty) -> Box<dyn ComputerPolicy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomPolicy),
        Difficulty::Regular => Box::new(BlockingPolicy::default()),
    }
}
