//! Rotation with horizontal kicks.
//!
//! After the matrix is turned, the piece is nudged sideways looking for a free
//! spot: +1, -2, +3, -4, ... relative to the current column each step, which
//! visits x+1, x-1, x+2, x-2, ... around the original column. The search gives
//! up once the next offset is wider than the (rotated) shape, and then the
//! piece is put back exactly as it was.

use crate::board::Board;
use crate::collision::collide;
use crate::game_state::ActivePiece;
use crate::types::RotateDirection;

/// Offset that follows `offset` in the kick sequence.
#[inline]
pub fn next_kick_offset(offset: i16) -> i16 {
    -(offset + if offset > 0 { 1 } else { -1 })
}

/// Rotate `piece` in place, kicking it sideways if needed.
///
/// Returns true if the rotation was kept. On rejection the shape and the
/// position are identical to what they were before the call. `y` is never
/// changed.
pub fn rotate_with_kicks(board: &Board, piece: &mut ActivePiece, dir: RotateDirection) -> bool {
    let origin_x = piece.x;
    let mut offset: i16 = 1;

    piece.shape.rotate(dir);
    while collide(board, piece) {
        piece.x += offset;
        offset = next_kick_offset(offset);
        if offset.abs() > piece.shape.width() as i16 {
            piece.shape.rotate(dir.opposite());
            piece.x = origin_x;
            return false;
        }
    }
    true
}
