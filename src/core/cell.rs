//! Board coordinates.
//!
//! A `Cell` is always in bounds: the only way to build one from raw
//! coordinates is `Cell::new`, which returns `None` for anything outside
//! the 3×3 grid.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of positions on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A board position, `row` and `col` in `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Create a cell, or `None` if either coordinate is out of bounds.
    ///
    /// ```
    /// use tictactoe_engine::core::Cell;
    ///
    /// assert!(Cell::new(2, 2).is_some());
    /// assert!(Cell::new(3, 0).is_none());
    /// ```
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Build a cell from a row-major index in `0..9`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
