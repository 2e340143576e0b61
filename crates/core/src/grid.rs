//! Grid module - the fixed playfield that accumulates locked pieces
//!
//! The grid is `width x height` cells stored in one flat row-major buffer.
//! Coordinates: (x, y) where x runs left to right and y runs top to bottom,
//! row 0 being the top row. Anything outside the grid reads as solid.

use crate::shape::Shape;
use crate::types::{Cell, Color};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (x, y), `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is outside the grid or holds a filled cell.
    ///
    /// The boundary behaves like a wall of filled cells on every side,
    /// including above row 0.
    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx].is_filled(),
            None => true,
        }
    }

    /// Row slice, `None` when out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(Cell::is_filled))
            .unwrap_or(false)
    }

    /// Write `color` into every cell covered by an occupied sub-cell of `shape`
    /// placed with its top-left at (x, y).
    ///
    /// No collision checking happens here; callers test with
    /// [`collides`](crate::collision::collides) first. Sub-cells that fall
    /// outside the grid are skipped.
    pub fn merge(&mut self, shape: &Shape, x: i32, y: i32, color: Color) {
        for (sx, sy) in shape.cells() {
            self.set(x + sx, y + sy, Cell::Filled(color));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom to top. A removed row lets everything above it slide down
    /// one row and an empty row appears at the top; the same index is then
    /// examined again, since the row that slid into it may also be full.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Drop row `y` and shift the rows above it down by one.
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}
