//! Pieces module - tetromino shape matrices
//!
//! Each piece is a small matrix of cell values. Occupied cells carry the piece's
//! identity value, so merging a piece into the board also records its color.
//! Rotation is done on the matrix itself (transpose + mirror), not through a
//! table of precomputed orientations.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, RotateDirection, EMPTY_CELL};

/// Largest matrix a shape can hold (4x4)
pub const MAX_SHAPE_CELLS: usize = 16;

/// One tetromino in one rotation state.
///
/// Row-major, row 0 on top. Shapes may be square or rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows of equal width.
    ///
    /// # Panics
    ///
    /// Panics if the matrix holds more than [`MAX_SHAPE_CELLS`] cells.
    pub fn from_rows<const W: usize>(rows: &[[Cell; W]]) -> Self {
        assert!(
            W * rows.len() <= MAX_SHAPE_CELLS,
            "shape {}x{} exceeds {} cells",
            W,
            rows.len(),
            MAX_SHAPE_CELLS
        );

        let mut cells = ArrayVec::new();
        for row in rows {
            cells.extend(row.iter().copied());
        }
        Self {
            width: W as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at local (x, y); empty outside the matrix.
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return EMPTY_CELL;
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Iterate the matrix one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Occupied cells as `(local_x, local_y, value)`.
    pub fn occupied(&self) -> impl Iterator<Item = (i16, i16, Cell)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY_CELL)
            .map(move |(i, &v)| ((i % w) as i16, (i / w) as i16, v))
    }

    /// Rotate the matrix a quarter turn in place.
    ///
    /// Transpose, then mirror each row (clockwise) or flip the row order
    /// (counter-clockwise). A `w x h` matrix becomes `h x w`.
    pub fn rotate(&mut self, dir: RotateDirection) {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut out: ArrayVec<Cell, MAX_SHAPE_CELLS> = ArrayVec::new();

        for r in 0..w {
            for c in 0..h {
                let v = match dir {
                    RotateDirection::Clockwise => self.cells[(h - 1 - c) * w + r],
                    RotateDirection::CounterClockwise => self.cells[c * w + (w - 1 - r)],
                };
                out.push(v);
            }
        }

        self.cells = out;
        self.width = h as u8;
        self.height = w as u8;
    }

    /// Return a rotated copy.
    pub fn rotated(&self, dir: RotateDirection) -> Self {
        let mut s = self.clone();
        s.rotate(dir);
        s
    }
}

/// Fresh spawn shape for a piece kind.
///
/// Every call returns an independent value.
pub fn create_piece(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_rows(&[[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        PieceKind::O => Shape::from_rows(&[[2, 2], [2, 2]]),
        PieceKind::L => Shape::from_rows(&[[0, 3, 0], [0, 3, 0], [0, 3, 3]]),
        PieceKind::J => Shape::from_rows(&[[0, 4, 0], [0, 4, 0], [4, 4, 0]]),
        PieceKind::I => Shape::from_rows(&[
            [0, 5, 0, 0],
            [0, 5, 0, 0],
            [0, 5, 0, 0],
            [0, 5, 0, 0],
        ]),
        PieceKind::S => Shape::from_rows(&[[0, 6, 6], [6, 6, 0], [0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(&[[7, 7, 0], [0, 7, 7], [0, 0, 0]]),
    }
}
