//! Board module - manages the game grid
//!
//! The board is a fixed-size grid of cell values, stored as a flat row-major
//! vector for cache locality. Coordinates are `(x, y)` with `x` growing to the
//! right and `y` growing downwards; row 0 is the spawn edge.
//!
//! Width and height are chosen once at creation and never change.

use crate::types::{Cell, EMPTY_CELL};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; (width as usize) * (height as usize)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    ///
    /// Out-of-bounds positions are reported as not occupied; deciding that
    /// walls are solid is the collision resolver's job.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY_CELL)
    }

    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16
    }

    fn row(&self, y: usize) -> &[Cell] {
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove row `y`, shift every row above it down by one and put an empty
    /// row on top.
    ///
    /// Returns false (and changes nothing) if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }

        let width = self.width as usize;
        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY_CELL);
        true
    }

    /// Write a piece's occupied cells at `(x, y)`.
    ///
    /// No collision checking: callers test with
    /// [`collide`](crate::collision::collide) first. Cells that fall outside
    /// the grid are dropped, since the board cannot store them.
    pub fn merge(&mut self, cells: impl IntoIterator<Item = (i16, i16, Cell)>, x: i16, y: i16) {
        for (dx, dy, value) in cells {
            self.set(x + dx, y + dy, value);
        }
    }

    /// Reset every cell to empty
    pub fn clear_all(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY_CELL)
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into `out`, reusing its allocation.
    pub fn write_cells_into(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }

    /// Build a board from rows, top row first.
    ///
    /// Returns None if the rows are empty, ragged or larger than 255 cells on
    /// a side.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > u8::MAX as usize || height > u8::MAX as usize {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells: rows.concat(),
        })
    }

    /// Convert to rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}
