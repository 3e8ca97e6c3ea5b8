//! Move records and the undo stack.
//!
//! History is push/pop only. A board holds at most nine marks, so the
//! stack lives inline in a `SmallVec` and never allocates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, CELL_COUNT};
use super::mark::Mark;

/// A mark placed at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub cell: Cell,
    pub mark: Mark,
}

impl Move {
    #[must_use]
    pub const fn new(cell: Cell, mark: Mark) -> Self {
        Self { cell, mark }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Ordered stack of moves played since the last reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: SmallVec<[Move; CELL_COUNT]>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove and return the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were played.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
