//! collision detection - walls, floor, ceiling and locked cells

use crate::grid::Grid;
use crate::shape::Shape;

/// does `shape` placed with its top-left at (x, y) hit anything?
///
/// Only occupied sub-cells count. Out-of-bounds cells read as occupied, so a
/// piece poking past any edge collides.
#[inline]
pub fn collides(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    shape
        .cells()
        .iter()
        .any(|&(sx, sy)| grid.is_occupied(x + sx, y + sy))
}

/// can we place here? (just !collides)
#[inline]
pub fn fits(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    !collides(grid, shape, x, y)
}

/// lowest y the shape can fall to from (x, y) without colliding
pub fn landing_y(grid: &Grid, shape: &Shape, x: i32, y: i32) -> i32 {
    let mut landing = y;
    while fits(grid, shape, x, landing + 1) {
        landing += 1;
    }
    landing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color, ShapeKind};

    #[test]
    fn test_no_collision_empty_grid() {
        let grid = Grid::new(12, 20);
        assert!(!collides(&grid, &Shape::of(ShapeKind::T), 4, 0));
    }

    #[test]
    fn test_collision_with_walls() {
        let grid = Grid::new(12, 20);
        let o = Shape::of(ShapeKind::O);
        assert!(collides(&grid, &o, -1, 0));
        assert!(collides(&grid, &o, 11, 0));
        assert!(!collides(&grid, &o, 10, 0));
    }

    #[test]
    fn test_collision_with_floor_and_ceiling() {
        let grid = Grid::new(12, 20);
        let o = Shape::of(ShapeKind::O);
        assert!(!collides(&grid, &o, 0, 18));
        assert!(collides(&grid, &o, 0, 19));
        assert!(collides(&grid, &o, 0, -1));
    }

    #[test]
    fn test_empty_subcells_do_not_collide() {
        let mut grid = Grid::new(12, 20);
        // T at (0, 0) leaves (0, 1) and (2, 1) empty.
        grid.set(0, 1, Cell::Filled(Color::Pink));
        grid.set(2, 1, Cell::Filled(Color::Pink));
        assert!(!collides(&grid, &Shape::of(ShapeKind::T), 0, 0));

        grid.set(1, 1, Cell::Filled(Color::Pink));
        assert!(collides(&grid, &Shape::of(ShapeKind::T), 0, 0));
    }

    #[test]
    fn test_empty_subcells_may_hang_outside() {
        // Left column is empty, so it may sit past the left wall.
        let grid = Grid::new(3, 3);
        let bar = Shape::from_rows(&[&[0, 1], &[0, 1]]).unwrap();
        assert!(!collides(&grid, &bar, -1, 0));
        assert!(collides(&grid, &bar, -2, 0));
    }

    #[test]
    fn test_landing_y() {
        let mut grid = Grid::new(12, 20);
        let o = Shape::of(ShapeKind::O);
        assert_eq!(landing_y(&grid, &o, 5, 0), 18);

        grid.set(5, 10, Cell::Filled(Color::Cyan));
        assert_eq!(landing_y(&grid, &o, 5, 0), 8);
    }
}
