//! Shapes module - the piece catalog and the clockwise rotation transform
//!
//! A shape is a small owned boolean matrix (at most 4x4). Rows have equal
//! length; `(x, y)` offsets are relative to the matrix's top-left corner.
//! Shapes are plain `Copy` values: rotating produces a new matrix and never
//! touches the catalog entry it started from.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, MAX_SHAPE_DIM};

/// Offset of a single occupied sub-cell relative to the shape origin
pub type CellOffset = (i32, i32);

/// Maximum number of occupied sub-cells a shape can have
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Occupied sub-cells of a shape, row by row
pub type ShapeCells = ArrayVec<CellOffset, MAX_SHAPE_CELLS>;

/// A piece shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// `rows[y][x]`; entries outside `width x height` are always false
    rows: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Catalog shape for a kind
    pub fn of(kind: ShapeKind) -> Self {
        let rows: &[&[u8]] = match kind {
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            ShapeKind::L => &[&[1, 1, 1], &[1, 0, 0]],
            ShapeKind::J => &[&[1, 1, 1], &[0, 0, 1]],
            ShapeKind::S => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::Z => &[&[0, 1, 1], &[1, 1, 0]],
        };
        // Catalog literals are rectangular and within bounds.
        Self::from_rows(rows).unwrap_or(Self::EMPTY_1X1)
    }

    const EMPTY_1X1: Shape = Shape {
        width: 1,
        height: 1,
        rows: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    };

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for empty or ragged input, or if either side exceeds
    /// [`MAX_SHAPE_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    ///
    /// let bar = Shape::from_rows(&[&[1, 1, 1]]).unwrap();
    /// assert_eq!((bar.width(), bar.height()), (3, 1));
    ///
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut out = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                out[y][x] = v != 0;
            }
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            rows: out,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the sub-cell at (x, y) is occupied; false outside the matrix
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Occupied sub-cells as `(x, y)` offsets, top row first
    pub fn cells(&self) -> ShapeCells {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: transpose, then reverse each resulting row.
    ///
    /// A `w x h` matrix becomes `h x w`. Four rotations give back the
    /// original matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    /// use tui_blockfall_types::ShapeKind;
    ///
    /// let i = Shape::of(ShapeKind::I);
    /// let vertical = i.rotate_cw();
    /// assert_eq!((vertical.width(), vertical.height()), (1, 4));
    /// assert_eq!(vertical.rotate_cw().rotate_cw().rotate_cw(), i);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

        // Transposed row r is old column r; reversing it reads old rows bottom-up.
        for (r, out_row) in rows.iter_mut().enumerate().take(w) {
            for (c, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.rows[h - 1 - c][r];
            }
        }

        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }
}

/// Free-function form of [`Shape::rotate_cw`]
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    shape.rotate_cw()
}
