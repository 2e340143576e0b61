//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, Color};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 10;

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Terminal renderer for one board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Frame position for a board of the snapshot's size.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let panel_w = PANEL_MIN_WIDTH + 2;

        let x = viewport.width.saturating_sub(frame_w.saturating_add(panel_w)) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let layout = self.layout(snap, viewport);
        let border = GlyphStyle::default();
        let bg = GlyphStyle {
            bg: PLAYFIELD_BG,
            ..GlyphStyle::default()
        };

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        draw_border(fb, layout, border);

        // Locked cells and the empty-cell grid.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x as i32, y as i32) {
                    Some(Cell::Filled(color)) => self.draw_block(fb, layout, x, y, color),
                    _ => self.draw_empty(fb, layout, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            if self.show_ghost && snap.ghost_y != Some(active.y) {
                if let Some(ghost_y) = snap.ghost_y {
                    let style = GlyphStyle {
                        fg: Rgb::from(active.color.rgb()).scaled(1, 2),
                        bg: PLAYFIELD_BG,
                        bold: false,
                        dim: true,
                    };
                    for (sx, sy) in active.shape.cells() {
                        if let Some((x, y)) = board_cell(snap, active.x + sx, ghost_y + sy) {
                            self.fill_cell(fb, layout, x, y, '░', style);
                        }
                    }
                }
            }

            for (sx, sy) in active.shape.cells() {
                if let Some((x, y)) = board_cell(snap, active.x + sx, active.y + sy) {
                    self.draw_block(fb, layout, x, y, active.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.is_game_over() {
            draw_overlay(fb, layout, "GAME OVER", 0);
            draw_overlay(fb, layout, "r: restart", 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, layout, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16, color: Color) {
        let style = GlyphStyle {
            fg: Rgb::from(color.rgb()),
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, layout, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        x: u16,
        y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = (layout.x + 1).saturating_add(x.saturating_mul(self.cell_w));
        let py = (layout.y + 1).saturating_add(y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = GlyphStyle {
            bold: true,
            ..GlyphStyle::default()
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            ..GlyphStyle::default()
        };
        let hint = GlyphStyle {
            dim: true,
            ..value
        };

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y = y.saturating_add(3);

        for line in ["←→ move", "↑ rotate", "↓ drop", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

/// Board coordinates for (x, y), if they are on the board.
fn board_cell(snap: &GameSnapshot, x: i32, y: i32) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= snap.width as i32 || y >= snap.height as i32 {
        return None;
    }
    Some((x as u16, y as u16))
}

fn draw_border(fb: &mut FrameBuffer, layout: BoardLayout, style: GlyphStyle) {
    let BoardLayout {
        x,
        y,
        frame_w: w,
        frame_h: h,
    } = layout;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centered text on the board, `line` rows below the middle.
fn draw_overlay(fb: &mut FrameBuffer, layout: BoardLayout, text: &str, line: u16) {
    let mid_y = layout.y.saturating_add(layout.frame_h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = GlyphStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    };
    fb.put_str(x, mid_y, text, style);
}
