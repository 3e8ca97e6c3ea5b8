//! The 3×3 grid and line detection.
//!
//! `Board` is a plain owned array and is `Copy`: callers that want to look
//! at the grid get their own snapshot, and the computer player can try a
//! hypothetical mark on a copy without touching the live board.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, BOARD_SIZE};
use super::mark::Mark;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Stored as `(row, col)` pairs so the table can be a `const`.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3×3 grid of marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows of marks.
    ///
    /// ```
    /// use tictactoe_engine::core::{Board, Mark};
    ///
    /// let board = Board::from_rows([
    ///     [Mark::X, Mark::X, Mark::X],
    ///     [Mark::O, Mark::O, Mark::Empty],
    ///     [Mark::Empty, Mark::Empty, Mark::Empty],
    /// ]);
    /// assert_eq!(board.winner(), Some(Mark::X));
    /// ```
    #[must_use]
    pub const fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.row()][cell.col()]
    }

    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.cells[cell.row()][cell.col()] = mark;
    }

    #[must_use]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Copy of this board with `mark` placed at `cell`.
    #[must_use]
    pub fn with_mark(mut self, cell: Cell, mark: Mark) -> Self {
        self.set(cell, mark);
        self
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.is_empty_at(cell))
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|mark| !mark.is_empty())
            .count()
    }

    /// True if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// True if all three cells of some line hold `mark`.
    ///
    /// Always false for `Mark::Empty`.
    #[must_use]
    pub fn has_line(&self, mark: Mark) -> bool {
        !mark.is_empty()
            && LINES
                .iter()
                .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == mark))
    }

    /// The mark owning the first completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            let first = self.cells[r0][c0];
            (!first.is_empty() && first == self.cells[r1][c1] && first == self.cells[r2][c2])
                .then_some(first)
        })
    }

    /// True if placing `mark` at the empty `cell` would complete a line.
    #[must_use]
    pub fn completes_line(&self, cell: Cell, mark: Mark) -> bool {
        self.is_empty_at(cell) && self.with_mark(cell, mark).has_line(mark)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, mark) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match mark {
                    Mark::Empty => write!(f, "_")?,
                    other => write!(f, "{}", other)?,
                }
            }
        }
        Ok(())
    }
}
