//! The game engine: turn sequencing, undo, scoring, and computer moves.
//!
//! The engine is driven entirely by discrete calls from a presentation
//! layer (clicks, or a timer firing for the computer's turn) and never
//! blocks or suspends.

mod game;

pub use game::{ComputerMove, EngineSnapshot, GameEngine};
