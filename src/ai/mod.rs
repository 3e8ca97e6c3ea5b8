//! Computer opponent.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_engine::ai::{BlockingPolicy, ComputerPolicy};
//! use tictactoe_engine::core::{Board, Cell, GameRng, Mark};
//!
//! let board = Board::from_rows([
//!     [Mark::X, Mark::X, Mark::Empty],
//!     [Mark::Empty, Mark::O, Mark::Empty],
//!     [Mark::Empty, Mark::Empty, Mark::Empty],
//! ]);
//! let mut rng = GameRng::new(42);
//!
//! let cell = BlockingPolicy::default().select(&board, &mut rng);
//! assert_eq!(cell, Cell::new(0, 2));
//! ```

pub mod policy;

pub use policy::{policy_for, BlockingPolicy, ComputerPolicy, RandomPolicy};
