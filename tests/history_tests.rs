//! Undo/redo integration tests.
//!
//! These tests verify the bounded undo stack, the redo stack and the
//! snapshot isolation through `GameState`.

use rust_2048::board::Board;
use rust_2048::core::{Direction, GameConfig, GameError, GameState, HistoryAction};

/// A board where left and right always move: a lone tile bouncing between
/// walls, with room for spawns elsewhere.
fn roomy_game() -> GameState {
    let mut board = Board::new(4, 4);
    board.place(2, 0, 0).unwrap();
    GameState::from_board(GameConfig::default().with_seed(5), board).unwrap()
}

/// Make `count` moves that each change the board.
fn make_moves(game: &mut GameState, count: usize) {
    let mut made = 0;
    let mut step = 0;
    while made < count {
        let direction = Direction::ALL[step % 4];
        step += 1;
        if game.apply_move(direction).moved {
            made += 1;
        }
        assert!(step < 1000, "could not find enough moving directions");
    }
}

// =============================================================================
// Bounded Undo
// =============================================================================

/// Six moves then six undos: five succeed, the sixth reports empty history.
#[test]
fn test_six_moves_only_five_undos() {
    let mut game = roomy_game();
    make_moves(&mut game, 6);

    for _ in 0..5 {
        assert_eq!(game.undo(), Ok(()));
    }
    assert_eq!(game.undo(), Err(GameError::EmptyHistory(HistoryAction::Undo)));
}

/// Undoing five times lands on the board after the first move, not before
/// it: the oldest snapshot was evicted.
#[test]
fn test_eviction_drops_oldest_state() {
    let mut game = roomy_game();
    game.apply_move(Direction::Right);
    let after_first = game.board().clone();
    make_moves(&mut game, 5);

    while game.undo().is_ok() {}

    assert_eq!(game.board(), &after_first);
}

/// A deeper configured history allows more undos.
#[test]
fn test_configured_depth() {
    let mut board = Board::new(4, 4);
    board.place(2, 0, 0).unwrap();
    let config = GameConfig::default().with_undo_depth(8);
    let mut game = GameState::from_board(config, board).unwrap();

    make_moves(&mut game, 10);

    let mut undone = 0;
    while game.undo().is_ok() {
        undone += 1;
    }
    assert_eq!(undone, 8);
}

// =============================================================================
// Redo
// =============================================================================

/// Undo immediately followed by redo restores the exact board.
#[test]
fn test_undo_redo_round_trip_is_exact() {
    let mut game = roomy_game();
    make_moves(&mut game, 4);
    let board = game.board().clone();
    let score = game.score();

    game.undo().unwrap();
    assert_ne!(game.board(), &board);
    game.redo().unwrap();

    assert_eq!(game.board(), &board);
    assert_eq!(game.score(), score);
    let tiles: Vec<_> = game.board().tiles().collect();
    let expected: Vec<_> = board.tiles().collect();
    assert_eq!(tiles, expected);
}

/// Several undos can be redone in order.
#[test]
fn test_multiple_redo_in_order() {
    let mut game = roomy_game();
    let mut boards = vec![game.board().clone()];
    for _ in 0..3 {
        make_moves(&mut game, 1);
        boards.push(game.board().clone());
    }

    for expected in boards.iter().rev().skip(1) {
        game.undo().unwrap();
        assert_eq!(game.board(), expected);
    }
    for expected in boards.iter().skip(1) {
        game.redo().unwrap();
        assert_eq!(game.board(), expected);
    }
    assert_eq!(game.redo(), Err(GameError::EmptyHistory(HistoryAction::Redo)));
}

/// A fresh move after undo throws away the redo stack.
#[test]
fn test_move_after_undo_clears_redo() {
    let mut game = roomy_game();
    make_moves(&mut game, 2);
    game.undo().unwrap();
    assert!(game.can_redo());

    make_moves(&mut game, 1);

    assert!(!game.can_redo());
    assert_eq!(game.redo(), Err(GameError::EmptyHistory(HistoryAction::Redo)));
}

/// A blocked move leaves history alone, including the redo stack.
#[test]
fn test_blocked_move_keeps_history() {
    let mut board = Board::new(2, 2);
    board.place(2, 0, 0).unwrap();
    let mut game = GameState::from_board(GameConfig::default(), board).unwrap();

    make_moves(&mut game, 1);
    game.undo().unwrap();
    let undo_len = game.history().undo_len();
    let redo_len = game.history().redo_len();

    // Back at the lone 2 in the corner, so left is blocked
    assert!(!game.apply_move(Direction::Left).moved);

    assert_eq!(game.history().undo_len(), undo_len);
    assert_eq!(game.history().redo_len(), redo_len);
    assert!(game.can_redo());
}

/// Failed undo/redo leave the game untouched.
#[test]
fn test_empty_history_is_not_fatal() {
    let mut game = roomy_game();
    let board = game.board().clone();

    assert!(game.undo().is_err());
    assert!(game.redo().is_err());
    assert_eq!(game.board(), &board);

    // Play continues normally
    assert!(game.apply_move(Direction::Right).moved);
    assert!(game.undo().is_ok());
}

/// Snapshots stay frozen while the live board keeps changing.
#[test]
fn test_snapshots_isolated_from_live_board() {
    let mut game = roomy_game();
    let start = game.board().clone();

    make_moves(&mut game, 5);
    for _ in 0..5 {
        game.undo().unwrap();
    }

    assert_eq!(game.board(), &start);
}
