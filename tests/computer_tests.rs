//! Integration tests for the computer opponent.

use tictactoe_engine::{
    Cell, Difficulty, EngineConfig, EngineError, GameEngine, GameMode, Mark, MoveStatus,
};

fn single_player(difficulty: Difficulty, seed: u64) -> GameEngine {
    GameEngine::with_config(
        EngineConfig::default()
            .with_mode(GameMode::SinglePlayer)
            .with_difficulty(difficulty)
            .with_seed(seed),
    )
}

/// Regular difficulty with both seats driven by the test, so boards can be
/// set up exactly before asking the computer to move.
fn two_player_regular(seed: u64) -> GameEngine {
    GameEngine::with_config(
        EngineConfig::default()
            .with_difficulty(Difficulty::Regular)
            .with_seed(seed),
    )
}

fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col).unwrap()
}

// =============================================================================
// Regular Difficulty
// =============================================================================

#[test]
fn test_regular_blocks_column_threat() {
    let mut engine = two_player_regular(42);

    // X _ _ / X O _ / _ _ _ with O to move
    for (row, col) in [(0, 0), (1, 1), (1, 0)] {
        engine.apply_move(row, col);
    }

    let computer = engine.computer_move().unwrap();

    assert_eq!(computer.cell, cell(2, 0));
    assert_eq!(engine.board().get(cell(2, 0)), Mark::O);
    assert_eq!(computer.result.status, MoveStatus::Continue(Mark::X));
}

#[test]
fn test_regular_takes_first_row_major_threat() {
    let mut engine = two_player_regular(7);

    // X X _ / X O _ / _ _ O with O to move: threats at (0,2) and (2,0)
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (1, 0)] {
        engine.apply_move(row, col);
    }
    assert_eq!(engine.current_player(), Mark::O);

    let computer = engine.computer_move().unwrap();

    assert_eq!(computer.cell, cell(0, 2));
}

#[test]
fn test_regular_without_threat_picks_empty_cell() {
    for seed in 0..20 {
        let mut engine = single_player(Difficulty::Regular, seed);
        engine.apply_move(0, 0);

        let computer = engine.computer_move().unwrap();

        assert_ne!(computer.cell, cell(0, 0));
        assert_eq!(engine.board().get(computer.cell), Mark::O);
        assert_eq!(engine.history().len(), 2);
    }
}

#[test]
fn test_regular_blocks_instead_of_winning() {
    let mut engine = two_player_regular(3);

    // O O _ / X _ _ / X _ X with O to move: O could win at (0,2),
    // but the heuristic blocks X at (2,1)
    for (row, col) in [(1, 0), (0, 0), (2, 0), (0, 1), (2, 2)] {
        engine.apply_move(row, col);
    }

    let computer = engine.computer_move().unwrap();

    assert_eq!(computer.cell, cell(2, 1));
    assert_eq!(computer.result.status, MoveStatus::Continue(Mark::X));
}

// =============================================================================
// Easy Difficulty
// =============================================================================

#[test]
fn test_easy_is_reproducible_with_seed() {
    let mut a = single_player(Difficulty::Easy, 1234);
    let mut b = single_player(Difficulty::Easy, 1234);

    for (row, col) in [(1, 1), (0, 0)] {
        let ra = a.apply_move(row, col);
        let rb = b.apply_move(row, col);
        assert_eq!(ra, rb);
        if !ra.computer_turn_pending {
            continue;
        }
        assert_eq!(a.computer_move(), b.computer_move());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_easy_never_overwrites() {
    for seed in 0..50 {
        let mut engine = single_player(Difficulty::Easy, seed);
        engine.apply_move(1, 1);
        let before = engine.board();

        let computer = engine.computer_move().unwrap();

        assert!(before.is_empty_at(computer.cell));
    }
}

#[test]
fn test_easy_reaches_every_empty_cell() {
    let mut seen = Vec::new();

    for seed in 0..200 {
        let mut engine = single_player(Difficulty::Easy, seed);
        engine.apply_move(1, 1);

        let computer = engine.computer_move().unwrap();
        if !seen.contains(&computer.cell) {
            seen.push(computer.cell);
        }
    }

    assert_eq!(seen.len(), 8);
    assert!(!seen.contains(&cell(1, 1)));
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_computer_can_finish_game() {
    for seed in 0..30 {
        let mut engine = single_player(Difficulty::Easy, seed);

        let mut finished = false;
        for _ in 0..9 {
            // Human plays the first empty cell
            let Some(human) = engine.board().empty_cells().next() else {
                break;
            };
            let result = engine.apply_move(human.row(), human.col());
            if result.status.is_terminal() {
                finished = true;
                break;
            }
            assert!(result.computer_turn_pending);

            let computer = engine.computer_move().unwrap();
            if computer.result.status.is_terminal() {
                finished = true;
                break;
            }
            assert!(!computer.result.computer_turn_pending);
        }

        assert!(finished, "seed {} never finished", seed);
        assert_eq!(engine.scoreboard().games_played(), 1);
    }
}

#[test]
fn test_computer_move_on_won_board() {
    let mut engine = two_player_regular(0);
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        engine.apply_move(row, col);
    }

    assert_eq!(engine.computer_move(), Err(EngineError::GameOver));
    assert_eq!(engine.history().len(), 5);
}

#[test]
fn test_computer_move_on_full_board() {
    let mut engine = GameEngine::with_config(EngineConfig::default().with_seed(0));
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
        engine.apply_move(row, col);
    }

    let err = engine.computer_move().unwrap_err();
    assert_eq!(err, EngineError::NoEmptyCells);
    assert_eq!(err.to_string(), "no empty cell left for the computer to play");
}
