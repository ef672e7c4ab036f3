//! Scoring module - line sweep and the per-pass multiplier
//!
//! Scoring rules:
//! - Rows are scanned bottom-up; row 0 is never tested directly.
//! - Every full row found in one sweep pass is worth
//!   `LINE_CLEAR_BASE_POINTS * multiplier`, and the multiplier doubles after
//!   each row: 10, 20, 40, 80, ...
//! - The multiplier starts over at 1 for every pass.

use crate::board::Board;
use crate::types::LINE_CLEAR_BASE_POINTS;

/// Result of one sweep pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepResult {
    pub rows_cleared: u32,
    pub points: u32,
}

/// Points for the `n`-th row (0-based) cleared in one pass.
pub fn row_points(n: u32) -> u32 {
    let multiplier = 1u32.checked_shl(n).unwrap_or(u32::MAX);
    LINE_CLEAR_BASE_POINTS.saturating_mul(multiplier)
}

/// Remove every full row and return what the pass was worth.
///
/// After a row is removed the same index is checked again, since the row that
/// slid into it may be full too.
pub fn sweep(board: &mut Board) -> SweepResult {
    let mut result = SweepResult::default();
    let mut y = board.height() as usize;

    while y > 1 {
        let row = y - 1;
        if board.is_row_full(row) {
            board.remove_row(row);
            result.points = result.points.saturating_add(row_points(result.rows_cleared));
            result.rows_cleared += 1;
            continue;
        }
        y -= 1;
    }

    result
}
