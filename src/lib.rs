//! # tictactoe-engine
//!
//! Game-state and decision engine for Tic-Tac-Toe: board, turns, win/draw
//! detection, undo, scoring, and a rule-based computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never renders or schedules.
//!    A UI forwards clicked cells in and renders the returned results.
//!
//! 2. **Total Operations**: Bad clicks are reported as `Rejected`, never as
//!    panics. Only caller bugs (a computer turn on a finished board) are
//!    errors.
//!
//! 3. **Snapshots, Not Shared State**: Queries return copies; the live
//!    board is owned by the engine alone.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, board, move history, RNG, configuration
//! - `rules`: Move results and the scoreboard
//! - `ai`: Computer move policies (random and one-ply blocking)
//! - `engine`: `GameEngine`, tying it all together
//! - `error`: `EngineError`

pub mod core;
pub mod rules;
pub mod ai;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Difficulty, EngineConfig, GameMode, GameRng, Mark, Move, MoveHistory,
    COMPUTER_MARK, HUMAN_MARK, LINES,
};

pub use crate::rules::{GameResult, MoveResult, MoveStatus, RejectReason, Scoreboard};

pub use crate::ai::{BlockingPolicy, ComputerPolicy, RandomPolicy};

pub use crate::engine::{ComputerMove, EngineSnapshot, GameEngine};

pub use crate::error::{EngineError, Result};
