//! Integration tests for the engine's public API

use sidebar_tetris::core::{collide, EngineConfig, GameState, Randomizer};
use sidebar_tetris::types::{HostCommand, InputEvent, Phase};

fn game(seed: u32) -> GameState {
    GameState::new(EngineConfig {
        seed,
        ..EngineConfig::default()
    })
    .unwrap()
}

#[test]
fn test_game_lifecycle() {
    let mut state = game(12345);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert!(!collide(state.board(), state.active()));

    let x0 = state.active().x;
    assert!(state.apply_input(InputEvent::MoveLeft));
    assert_eq!(state.active().x, x0 - 1);
    assert!(state.apply_input(InputEvent::MoveRight));
    assert_eq!(state.active().x, x0);

    assert!(state.apply_input(InputEvent::SoftDrop));
    assert_eq!(state.active().y, 1);
    assert!(!collide(state.board(), state.active()));
}

#[test]
fn test_drop_interval_scenario() {
    let mut state = game(1);
    let y0 = state.active().y;

    let mut drops = 0;
    for t in 0..=999u64 {
        if state.tick(t) {
            drops += 1;
        }
    }
    assert_eq!(drops, 0);
    assert_eq!(state.active().y, y0);

    assert!(state.tick(1001));
    assert_eq!(state.active().y, y0 + 1);
    assert!(!state.tick(1002));
}

#[test]
fn test_custom_drop_interval() {
    let mut state = GameState::new(EngineConfig {
        drop_interval_ms: 100,
        ..EngineConfig::default()
    })
    .unwrap();
    assert!(!state.tick(0));
    assert!(!state.tick(100));
    assert!(state.tick(101));
    assert!(!state.tick(201));
    assert!(state.tick(202));
}

#[test]
fn test_pause_gating_through_public_api() {
    let mut state = game(99);
    state.tick(0);
    state.on_external_pause();

    let before = state.render_state();
    for t in 1..100u64 {
        state.apply_input(InputEvent::MoveLeft);
        state.apply_input(InputEvent::RotateCw);
        state.apply_input(InputEvent::SoftDrop);
        state.tick(t * 250);
    }
    assert_eq!(state.render_state(), before);

    // Toggle resumes; time spent paused is not counted.
    state.apply_input(InputEvent::TogglePause);
    assert!(!state.tick(100 * 250));
}

#[test]
fn test_stacking_in_the_middle_ends_in_board_reset() {
    // Pieces only ever occupy the spawn columns, so no row can complete and
    // the stack eventually blocks the spawn.
    let mut state = game(7);
    let mut reset_seen = false;
    let mut landings = 0;

    for _ in 0..2_000 {
        state.apply_input(InputEvent::SoftDrop);
        if let Some(ev) = state.take_last_event() {
            landings += 1;
            assert_eq!(ev.rows_cleared, 0);
            if ev.board_reset {
                reset_seen = true;
                break;
            }
        }
    }

    assert!(reset_seen, "no board reset after {} landings", landings);
    assert!(state.board().is_empty());
    assert_eq!(state.score(), 0);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.active().y, 0);
}

#[test]
fn test_host_reset_twice_equals_once() {
    let mut state = game(3);
    for _ in 0..30 {
        state.apply_input(InputEvent::SoftDrop);
    }
    state.apply_input(InputEvent::TogglePause);

    state.on_host_command(HostCommand::Reset);
    let once = state.render_state();
    state.on_host_command(HostCommand::Reset);
    let twice = state.render_state();

    assert_eq!(once.board, twice.board);
    assert!(twice.board.iter().all(|&c| c == 0));
    assert_eq!((once.score, twice.score), (0, 0));
    assert_eq!((once.phase, twice.phase), (Phase::Running, Phase::Running));
    assert_eq!(twice.active.y, 0);
}

#[test]
fn test_bag7_config_is_deterministic() {
    let config = EngineConfig {
        seed: 2024,
        randomizer: Randomizer::Bag7,
        ..EngineConfig::default()
    };
    let mut a = GameState::new(config).unwrap();
    let mut b = GameState::new(config).unwrap();
    for _ in 0..300 {
        a.apply_input(InputEvent::SoftDrop);
        b.apply_input(InputEvent::SoftDrop);
        assert_eq!(a.active().kind, b.active().kind);
    }
    assert_eq!(a.render_state(), b.render_state());
}

#[test]
fn test_small_custom_board() {
    let mut state = GameState::new(EngineConfig {
        board_width: 6,
        board_height: 8,
        ..EngineConfig::default()
    })
    .unwrap();
    let rs = state.render_state();
    assert_eq!((rs.width, rs.height), (6, 8));
    assert_eq!(rs.board.len(), 48);

    for _ in 0..500 {
        state.apply_input(InputEvent::SoftDrop);
        state.apply_input(InputEvent::RotateCw);
        assert!(!collide(state.board(), state.active()));
    }
}
