use crate::piece::ActivePiece;
use crate::shape::Shape;
use crate::types::{Cell, Color, Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

impl ActiveSnapshot {
    /// Does the piece cover grid cell (x, y)?
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (sx, sy) = (x - self.x, y - self.y);
        sx >= 0 && sy >= 0 && self.shape.is_filled(sx as usize, sy as usize)
    }
}

/// Read-only copy of everything a renderer needs.
///
/// `cells` is row-major, `width * height` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i32>,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells.clear();
        self.cells
            .resize(self.width as usize * self.height as usize, Cell::Empty);
        self.active = None;
        self.ghost_y = None;
        self.score = 0;
        self.lines = 0;
        self.phase = Phase::Running;
    }

    /// Locked grid cell at (x, y); the active piece is not included.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// What is shown at (x, y): the active piece on top of the locked grid.
    pub fn visible_cell(&self, x: i32, y: i32) -> Option<Cell> {
        let locked = self.cell(x, y)?;
        match self.active {
            Some(active) if active.covers(x, y) => Some(Cell::Filled(active.color)),
            _ => Some(locked),
        }
    }

    /// Does the landing preview cover (x, y)?
    pub fn ghost_covers(&self, x: i32, y: i32) -> bool {
        match (self.active, self.ghost_y) {
            (Some(active), Some(gy)) => ActiveSnapshot { y: gy, ..active }.covers(x, y),
            _ => false,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: Vec::new(),
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            phase: Phase::Running,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.cells.len(), 12 * 20);
        assert_eq!(snap.cell(0, 0), Some(Cell::Empty));
        assert_eq!(snap.cell(12, 0), None);
        assert_eq!(snap.cell(0, -1), None);
        assert!(!snap.is_game_over());
    }

    #[test]
    fn test_visible_cell_overlays_active() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(ActiveSnapshot::from(ActivePiece::new(
            ShapeKind::T,
            Color::Purple,
            12,
        )));
        snap.ghost_y = Some(18);

        // T = [111, 010] at x=5
        assert_eq!(snap.visible_cell(6, 1), Some(Cell::Filled(Color::Purple)));
        assert_eq!(snap.visible_cell(5, 1), Some(Cell::Empty));
        assert_eq!(snap.cell(6, 1), Some(Cell::Empty));

        assert!(snap.ghost_covers(7, 18));
        assert!(snap.ghost_covers(6, 19));
        assert!(!snap.ghost_covers(5, 19));
    }
}
