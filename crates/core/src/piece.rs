//! Active piece and the spawn-position rule

use crate::collision::collides;
use crate::grid::Grid;
use crate::rng::PieceQueue;
use crate::shape::{Shape, ShapeCells};
use crate::types::{Color, ShapeKind};

/// The falling, player-controlled piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub shape: Shape,
    /// Top-left corner of the shape matrix in grid coordinates
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl ActivePiece {
    /// Place a catalog shape at its spawn position on a board `board_width` wide
    pub fn new(kind: ShapeKind, color: Color, board_width: u16) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: spawn_x(board_width, shape.width()),
            y: 0,
            color,
        }
    }

    /// Draw a kind and color from the queue and place it at spawn
    pub fn spawn(queue: &mut PieceQueue, board_width: u16) -> Self {
        let (kind, color) = queue.draw();
        Self::new(kind, color, board_width)
    }

    /// Occupied cells in absolute grid coordinates
    pub fn cells(&self) -> ShapeCells {
        self.shape
            .cells()
            .into_iter()
            .map(|(sx, sy)| (self.x + sx, self.y + sy))
            .collect()
    }

    /// Does the piece overlap the grid or its bounds where it stands?
    pub fn collides(&self, grid: &Grid) -> bool {
        collides(grid, &self.shape, self.x, self.y)
    }
}

/// Horizontal spawn column: `floor(W/2) - floor(w/2)`.
///
/// For odd shape widths this sits half a cell left of true center.
pub fn spawn_x(board_width: u16, shape_width: u8) -> i32 {
    (board_width / 2) as i32 - (shape_width / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_x_on_default_board() {
        assert_eq!(spawn_x(12, 4), 4); // I
        assert_eq!(spawn_x(12, 2), 5); // O
        assert_eq!(spawn_x(12, 3), 5); // T, L, J, S, Z
    }

    #[test]
    fn test_spawn_x_odd_board() {
        assert_eq!(spawn_x(11, 3), 4);
        assert_eq!(spawn_x(1, 4), -2);
    }

    #[test]
    fn test_new_piece_at_top() {
        let piece = ActivePiece::new(ShapeKind::O, Color::Yellow, 12);
        assert_eq!((piece.x, piece.y), (5, 0));
        assert_eq!(piece.shape, Shape::of(ShapeKind::O));
    }

    #[test]
    fn test_absolute_cells() {
        let piece = ActivePiece::new(ShapeKind::O, Color::Yellow, 12);
        assert_eq!(piece.cells().as_slice(), &[(5, 0), (6, 0), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_spawn_from_scripted_queue() {
        let mut queue = PieceQueue::scripted(&[ShapeKind::T], 1);
        let piece = ActivePiece::spawn(&mut queue, 12);
        assert_eq!(piece.kind, ShapeKind::T);
        assert_eq!(piece.x, 5);
        assert!(!piece.collides(&Grid::new(12, 20)));
    }
}
