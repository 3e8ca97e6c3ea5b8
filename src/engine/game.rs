//! The game engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ai::policy_for;
use crate::core::{
    Board, Cell, Difficulty, EngineConfig, GameMode, GameRng, Mark, Move, MoveHistory,
    COMPUTER_MARK,
};
use crate::error::{EngineError, Result};
use crate::rules::{GameResult, MoveResult, MoveStatus, RejectReason, Scoreboard};

/// A computer move: where it played and what happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMove {
    pub cell: Cell,
    pub result: MoveResult,
}

/// Read-only copy of everything a presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub board: Board,
    pub current_player: Mark,
    pub history: MoveHistory,
    pub scoreboard: Scoreboard,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

/// Tic-Tac-Toe engine.
///
/// Owns the board, move history, scores, and mode/difficulty settings.
/// Every operation is synchronous and finishes in constant time. The
/// engine never schedules the computer's move itself: when a result has
/// `computer_turn_pending` set, the caller decides when to call
/// [`GameEngine::computer_move`].
///
/// ```
/// use tictactoe_engine::{GameEngine, Mark, MoveStatus};
///
/// let mut engine = GameEngine::new();
/// engine.apply_move(0, 0);
/// engine.apply_move(1, 1);
/// engine.apply_move(0, 1);
/// engine.apply_move(1, 0);
/// let result = engine.apply_move(0, 2);
///
/// assert_eq!(result.status, MoveStatus::Win(Mark::X));
/// assert_eq!(engine.scoreboard().x_wins, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    history: MoveHistory,
    current_player: Mark,
    scoreboard: Scoreboard,
    mode: GameMode,
    difficulty: Difficulty,
    rng: GameRng,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from a configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            current_player: Mark::X,
            scoreboard: Scoreboard::new(),
            mode: config.mode,
            difficulty: config.difficulty,
            rng: GameRng::from_seed_option(config.seed),
        }
    }

    // === Moves ===

    /// Place the current player's mark at `(row, col)`.
    ///
    /// Out-of-bounds, occupied, or post-win moves are rejected without
    /// touching any state. A winning or drawing move updates the
    /// scoreboard; the board stays as-is until the caller resets it.
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveResult {
        match Cell::new(row, col) {
            Some(cell) => self.apply_cell(cell),
            None => {
                trace!(row, col, "move rejected: out of bounds");
                MoveResult::rejected(RejectReason::OutOfBounds)
            }
        }
    }

    /// Same as [`GameEngine::apply_move`] for an already-validated cell.
    pub fn apply_cell(&mut self, cell: Cell) -> MoveResult {
        if self.winner().is_some() {
            trace!(%cell, "move rejected: game over");
            return MoveResult::rejected(RejectReason::GameOver);
        }
        if !self.board.is_empty_at(cell) {
            trace!(%cell, "move rejected: occupied");
            return MoveResult::rejected(RejectReason::Occupied);
        }

        let mark = self.current_player;
        self.board.set(cell, mark);
        self.history.push(Move::new(cell, mark));
        debug!(%cell, %mark, moves = self.history.len(), "move applied");

        if self.board.has_line(mark) {
            self.finish(GameResult::Winner(mark));
            return MoveResult::new(MoveStatus::Win(mark), false);
        }
        if self.board.is_full() {
            self.finish(GameResult::Draw);
            return MoveResult::new(MoveStatus::Draw, false);
        }

        self.current_player = mark.opponent();
        MoveResult::new(
            MoveStatus::Continue(self.current_player),
            self.is_computer_turn(),
        )
    }

    fn finish(&mut self, result: GameResult) {
        self.scoreboard.record(result);
        debug!(?result, score = %self.scoreboard, "game over");
    }

    /// Take back the most recent move.
    ///
    /// The player whose move was undone moves again; this is not an
    /// alternation rewind. Returns `false` if there was nothing to undo.
    /// Scores are never touched.
    pub fn undo_move(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };

        self.board.set(last.cell, Mark::Empty);
        self.current_player = last.mark;
        debug!(cell = %last.cell, mark = %last.mark, "move undone");
        true
    }

    /// Let the computer choose and play a cell.
    ///
    /// `Easy` picks a random empty cell. `Regular` blocks the first
    /// row-major cell where X would complete a line, else picks randomly.
    /// The move goes through [`GameEngine::apply_cell`], so scoring and
    /// turn handling are identical to a human move.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameOver`] if the board already has a line, and
    /// [`EngineError::NoEmptyCells`] if the board is full. Both mean the
    /// caller scheduled a computer turn without checking the last result.
    pub fn computer_move(&mut self) -> Result<ComputerMove> {
        if self.winner().is_some() {
            return Err(EngineError::GameOver);
        }

        let cell = policy_for(self.difficulty)
            .select(&self.board, &mut self.rng)
            .ok_or(EngineError::NoEmptyCells)?;
        debug!(%cell, difficulty = ?self.difficulty, "computer chose cell");

        let result = self.apply_cell(cell);
        Ok(ComputerMove { cell, result })
    }

    // === Lifecycle and configuration ===

    /// Clear the board and history; X moves next. Scores are kept.
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_player = Mark::X;
        debug!("board reset");
    }

    /// Change the game mode. Always resets the board.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        debug!(?mode, "mode set");
        self.reset_board();
    }

    /// Change the computer difficulty. Always resets the board.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        debug!(?difficulty, "difficulty set");
        self.reset_board();
    }

    /// Switch between two-player and single-player, returning the new mode.
    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.mode.toggled();
        self.set_mode(mode);
        mode
    }

    /// Switch between Easy and Regular, returning the new difficulty.
    pub fn toggle_difficulty(&mut self) -> Difficulty {
        let difficulty = self.difficulty.toggled();
        self.set_difficulty(difficulty);
        difficulty
    }

    // === Queries ===

    /// Copy of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Mark that moves next.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Copy of the session scores.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Moves played since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Current game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current computer difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Mark owning a completed line on the current board, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    /// True if the current board is won or full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// True if single-player mode is on and the computer moves next.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::SinglePlayer && self.current_player == COMPUTER_MARK
    }

    /// Turn prompt, e.g. `"Player X's turn"`.
    #[must_use]
    pub fn turn_text(&self) -> String {
        format!("Player {}'s turn", self.current_player)
    }

    /// Copy of the full renderable state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board,
            current_player: self.current_player,
            history: self.history.clone(),
            scoreboard: self.scoreboard,
            mode: self.mode,
            difficulty: self.difficulty,
        }
    }
}
