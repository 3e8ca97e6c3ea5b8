//! Core engine types: marks, cells, the board, move history, RNG, configuration.
//!
//! Everything here is plain data with no knowledge of turns or scoring.
//! The `engine` module composes these into a playable game.

pub mod mark;
pub mod cell;
pub mod board;
pub mod history;
pub mod rng;
pub mod config;

pub use mark::{Mark, COMPUTER_MARK, HUMAN_MARK};
pub use cell::{Cell, BOARD_SIZE, CELL_COUNT};
pub use board::{Board, LINES};
pub use history::{Move, MoveHistory};
pub use rng::GameRng;
pub use config::{Difficulty, EngineConfig, GameMode};
