//! Board marks.

use serde::{Deserialize, Serialize};

/// Contents of a single board position.
///
/// `Empty` is the default. `X` always moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

/// Mark played by the human seat in single-player mode.
pub const HUMAN_MARK: Mark = Mark::X;

/// Mark played by the computer in single-player mode.
pub const COMPUTER_MARK: Mark = Mark::O;

impl Mark {
    /// The mark that moves after this one.
    ///
    /// `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
            Mark::Empty => Ok(()),
        }
    }
}
