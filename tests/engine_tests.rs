//! Engine tests - lifecycle, command guards, and determinism via the public API

use blockfall::core::{Game, Phase};
use blockfall::types::{GameAction, BOARD_HEIGHT};

#[test]
fn test_commands_before_start_are_noops() {
    let mut game = Game::new(1);

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        game.apply(action);
    }

    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.active().is_none());
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.level(), 1);
}

#[test]
fn test_start_transitions_to_running() {
    let mut game = Game::new(1);
    game.apply(GameAction::Start);

    assert!(game.is_running());
    assert!(game.active().is_some());
    assert!(game.next_piece().is_some());
    assert_eq!(game.level(), 1);
}

#[test]
fn test_gravity_step_moves_piece_down() {
    let mut game = Game::new(1);
    game.start();

    let y0 = game.active().unwrap().y;
    game.step();
    assert_eq!(game.active().unwrap().y, y0 + 1);
}

#[test]
fn test_step_and_move_down_share_semantics() {
    let mut a = Game::new(777);
    let mut b = Game::new(777);
    a.start();
    b.start();

    for _ in 0..(BOARD_HEIGHT as usize * 3) {
        a.step();
        b.move_down();
        assert_eq!(a.active(), b.active());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.lines(), b.lines());
        assert_eq!(a.phase(), b.phase());
    }
}

#[test]
fn test_piece_locks_at_bottom_and_next_is_promoted() {
    let mut game = Game::new(9);
    game.start();

    let promised = game.next_piece().unwrap().kind;

    // Stepping a board-height's worth of rows must lock the first piece.
    for _ in 0..=BOARD_HEIGHT as usize {
        game.step();
        if game.board().cells().iter().any(|c| c.is_some()) {
            break;
        }
    }

    let active = game.active().expect("a new piece should be active");
    assert_eq!(active.kind, promised);
    assert_eq!(active.y, 0);

    // The locked piece is now part of the grid.
    let locked = game.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(locked, 4);
}

#[test]
fn test_hard_drop_locks_immediately() {
    let mut game = Game::new(3);
    game.start();

    game.apply(GameAction::HardDrop);

    // Active piece replaced, old one merged at the bottom of the grid.
    assert!(game.active().is_some());
    let locked = game.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(locked, 4);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::new(20260830);
    let mut b = Game::new(20260830);
    a.start();
    b.start();

    for _ in 0..10 {
        assert_eq!(a.active().unwrap().kind, b.active().unwrap().kind);
        assert_eq!(a.next_piece().unwrap().kind, b.next_piece().unwrap().kind);
        a.hard_drop();
        b.hard_drop();
        if a.game_over() || b.game_over() {
            break;
        }
    }
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.board().cells(), b.board().cells());
}

#[test]
fn test_level_invariant_holds_throughout() {
    let mut game = Game::new(5);
    game.start();

    for _ in 0..200 {
        game.apply(GameAction::MoveLeft);
        game.apply(GameAction::Rotate);
        game.step();
        assert_eq!(game.level(), game.lines() / 10 + 1);
        if game.game_over() {
            break;
        }
    }
}

#[test]
fn test_reset_returns_to_idle() {
    let mut game = Game::new(1);
    game.start();
    game.hard_drop();
    assert!(game.board().cells().iter().any(|c| c.is_some()));

    game.reset();

    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.active().is_none());
    assert!(game.next_piece().is_none());
    assert!(game.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.level(), 1);

    // A reset engine can start again.
    game.start();
    assert!(game.is_running());
}

#[test]
fn test_snapshot_mirrors_engine_state() {
    let mut game = Game::new(17);
    game.start();
    game.hard_drop();

    let snap = game.snapshot();
    assert_eq!(snap.score, game.score());
    assert_eq!(snap.lines, game.lines());
    assert_eq!(snap.level, game.level());
    assert_eq!(snap.phase, game.phase());
    assert_eq!(snap.active, game.active());
    assert_eq!(snap.next, game.next_piece());

    let snap_locked: usize = snap
        .board
        .iter()
        .flatten()
        .filter(|c| c.is_some())
        .count();
    let board_locked = game.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(snap_locked, board_locked);
}
