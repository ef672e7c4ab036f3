//! Collision resolver - overlap test between a piece and the board.

use crate::board::Board;
use crate::game_state::ActivePiece;

/// True if any occupied cell of `piece` is past the side walls, at or below
/// the floor, or on top of a settled cell.
///
/// Cells above the top edge (negative y) never collide.
pub fn collide(board: &Board, piece: &ActivePiece) -> bool {
    let width = board.width() as i16;
    let height = board.height() as i16;

    piece.shape.occupied().any(|(dx, dy, _)| {
        let x = piece.x + dx;
        let y = piece.y + dy;
        if x < 0 || x >= width || y >= height {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}
