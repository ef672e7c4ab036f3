//! Property tests over generated rollouts.
//!
//! Invariants covered:
//! - Board dimensions never change and only values `0..=7` appear.
//! - The active piece never overlaps the board or walls between operations.
//! - A rejected rotation leaves the piece exactly as it was, and dense boards
//!   reach both the kept and the rejected outcome.
//! - Score only goes down on a board reset, and then to 0.
//! - Sweep scores `10 * (2^n - 1)` for `n` rows in one pass.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use sidebar_tetris::core::{
    collide, rotate_with_kicks, sweep, ActivePiece, Board, EngineConfig, GameState, Randomizer,
    SimpleRng,
};
use sidebar_tetris::types::{InputEvent, PieceKind, RotateDirection};

fn input_from(i: u8) -> InputEvent {
    match i % 4 {
        0 => InputEvent::MoveLeft,
        1 => InputEvent::MoveRight,
        2 => InputEvent::SoftDrop,
        _ => InputEvent::RotateCw,
    }
}

const W: u8 = 12;
const H: u8 = 20;

/// Spawn shape at an in-bounds position picked from two seeds.
fn placed_piece(kind: PieceKind, x_pick: u16, y_pick: u16) -> ActivePiece {
    let mut piece = ActivePiece::spawn(kind, W);
    let w = piece.shape.width() as u16;
    let h = piece.shape.height() as u16;
    piece.x = (x_pick % (W as u16 - w + 1)) as i16;
    piece.y = (y_pick % (H as u16 - h + 1)) as i16;
    piece
}

/// Fill each cell whose `fill` roll is below `density` percent, then clear
/// the cells under `piece` so it starts in a free spot.
fn scattered_board(fill: &[u8], density: u8, piece: &ActivePiece) -> Board {
    let mut board = Board::new(W, H);
    for (i, &roll) in fill.iter().enumerate() {
        if roll < density {
            board.set((i % W as usize) as i16, (i / W as usize) as i16, 1);
        }
    }
    for (x, y, _) in piece.cells() {
        board.set(x, y, 0);
    }
    board
}

/// Rotate once and check the outcome. Returns whether the rotation was kept.
fn check_rotation(
    board: &Board,
    mut piece: ActivePiece,
    dir: RotateDirection,
) -> Result<bool, TestCaseError> {
    let before = piece.clone();
    if rotate_with_kicks(board, &mut piece, dir) {
        prop_assert!(!collide(board, &piece));
        prop_assert_eq!(piece.y, before.y);
        prop_assert!((piece.x - before.x).abs() <= 4);
        Ok(true)
    } else {
        prop_assert_eq!(piece, before);
        Ok(false)
    }
}

#[test]
fn dense_boards_exercise_both_rotation_outcomes() {
    let mut rng = SimpleRng::new(0x5eed);
    let (mut kept, mut rejected) = (0, 0);

    for _ in 0..2_000 {
        let kind = PieceKind::ALL[rng.next_range(7) as usize];
        let piece = placed_piece(kind, rng.next_u32() as u16, rng.next_u32() as u16);
        let fill: Vec<u8> = (0..240).map(|_| rng.next_range(100) as u8).collect();
        let board = scattered_board(&fill, 45, &piece);

        match check_rotation(&board, piece, RotateDirection::Clockwise) {
            Ok(true) => kept += 1,
            Ok(false) => rejected += 1,
            Err(e) => panic!("{}", e),
        }
    }

    assert!(kept > 0, "no rotation was kept");
    assert!(rejected > 0, "no rotation was rejected");
}

proptest! {
    #[test]
    fn generated_rollout_respects_core_invariants(
        seed in any::<u32>(),
        use_bag7 in any::<bool>(),
        width in 4u8..16,
        height in 4u8..24,
        inputs in proptest::collection::vec(any::<u8>(), 1..400),
    ) {
        let config = EngineConfig {
            seed,
            board_width: width,
            board_height: height,
            randomizer: if use_bag7 { Randomizer::Bag7 } else { Randomizer::Uniform },
            ..EngineConfig::default()
        };
        let mut gs = GameState::new(config).unwrap();
        let mut score = gs.score();

        for (step, i) in inputs.into_iter().enumerate() {
            gs.apply_input(input_from(i));
            gs.tick(step as u64 * 97);

            let board = gs.board();
            prop_assert_eq!(board.width(), width);
            prop_assert_eq!(board.height(), height);
            prop_assert!(board.cells().iter().all(|&c| c <= 7));
            prop_assert!(!collide(board, gs.active()));
            prop_assert!(gs.active().cells().all(|(x, _, _)| x >= 0 && x < width as i16));

            match gs.take_last_event() {
                Some(ev) if ev.board_reset => prop_assert_eq!(gs.score(), 0),
                Some(ev) => prop_assert_eq!(gs.score(), score.saturating_add(ev.points)),
                None => prop_assert_eq!(gs.score(), score),
            }
            score = gs.score();
        }
    }

    #[test]
    fn rejected_rotation_is_bit_identical(
        kind_idx in 0usize..7,
        x_pick in any::<u16>(),
        y_pick in any::<u16>(),
        density in 5u8..60,
        fill in proptest::collection::vec(0u8..100, 240),
        clockwise in any::<bool>(),
    ) {
        let piece = placed_piece(PieceKind::ALL[kind_idx], x_pick, y_pick);
        let board = scattered_board(&fill, density, &piece);
        prop_assert!(!collide(&board, &piece));

        let dir = if clockwise { RotateDirection::Clockwise } else { RotateDirection::CounterClockwise };
        check_rotation(&board, piece, dir)?;
    }

    #[test]
    fn sweep_scores_by_doubling(full_rows in proptest::collection::vec(any::<bool>(), 4..20)) {
        let width = 5u8;
        let height = full_rows.len() as u8 + 1;
        let mut board = Board::new(width, height);
        // Row 0 stays empty; other rows are full or hold a single marker.
        for (i, &full) in full_rows.iter().enumerate() {
            let y = i as i16 + 1;
            if full {
                for x in 0..width as i16 {
                    board.set(x, y, 3);
                }
            } else {
                board.set(0, y, 4);
            }
        }

        let n = full_rows.iter().filter(|&&f| f).count() as u32;
        let r = sweep(&mut board);
        prop_assert_eq!(r.rows_cleared, n);
        prop_assert_eq!(r.points, 10 * ((1u32 << n) - 1));
        prop_assert!((0..height as usize).all(|y| !board.is_row_full(y)));
        let markers = board.cells().iter().filter(|&&c| c == 4).count() as u32;
        prop_assert_eq!(markers, full_rows.len() as u32 - n);
    }
}
