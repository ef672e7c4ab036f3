use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

/// Read-only view of the game for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderState {
    pub width: u8,
    pub height: u8,
    /// Settled cells, row-major (`y * width + x`). The active piece is not
    /// merged in.
    pub board: Vec<Cell>,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub phase: Phase,
}

impl RenderState {
    /// Settled cell at `(x, y)`, or None outside the board.
    pub fn cell(&self, x: i16, y: i16) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Cell to draw at `(x, y)`: the active piece on top of the board.
    pub fn visible_cell(&self, x: i16, y: i16) -> Option<Cell> {
        let settled = self.cell(x, y)?;
        let lx = x - self.active.x;
        let ly = y - self.active.y;
        if lx >= 0
            && ly >= 0
            && lx < self.active.shape.width() as i16
            && ly < self.active.shape.height() as i16
        {
            let v = self.active.shape.get(lx as u8, ly as u8);
            if v != 0 {
                return Some(v);
            }
        }
        Some(settled)
    }

    pub fn paused(&self) -> bool {
        !self.phase.is_running()
    }
}
