//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and every frame after a resize or `invalidate`) is a full
//! redraw. Otherwise only runs of changed glyphs are re-sent. Both paths go
//! through [`Painter`], which only emits the style attributes that changed.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Byte-level encoder for one frame's worth of glyph runs.
///
/// Remembers the last style it emitted so consecutive glyphs of the same
/// color cost one byte each.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<GlyphStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    /// Paint `len` glyphs of `fb` starting at (x, y).
    fn run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        for dx in 0..len {
            self.glyph(fb.get(x + dx, y).unwrap_or_default())?;
        }
        Ok(())
    }

    fn glyph(&mut self, glyph: Glyph) -> io::Result<()> {
        self.restyle(glyph.style)?;
        queue!(self.out, Print(glyph.ch))
    }

    fn restyle(&mut self, next: GlyphStyle) -> io::Result<()> {
        let prev = match self.style {
            Some(prev) if prev == next => return Ok(()),
            Some(prev) if prev.bold == next.bold && prev.dim == next.dim => prev,
            // Attribute::Reset also drops colors, so start from scratch.
            _ => {
                queue!(self.out, SetAttribute(Attribute::Reset))?;
                if next.bold {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                if next.dim {
                    queue!(self.out, SetAttribute(Attribute::Dim))?;
                }
                queue!(
                    self.out,
                    SetForegroundColor(next.fg.into()),
                    SetBackgroundColor(next.bg.into())
                )?;
                self.style = Some(next);
                return Ok(());
            }
        };

        if prev.fg != next.fg {
            queue!(self.out, SetForegroundColor(next.fg.into()))?;
        }
        if prev.bg != next.bg {
            queue!(self.out, SetBackgroundColor(next.bg.into()))?;
        }
        self.style = Some(next);
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        if self.style.is_some() {
            queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("could not switch the terminal to raw mode")?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). Safe to call even if `enter` failed halfway.
    ///
    /// Raw mode is always released, even when the screen sequence could not be
    /// written.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode().context("could not restore the terminal from raw mode")?;
        flushed
    }

    /// Force the next draw to be a full redraw (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call it holds the previous frame, ready to be overwritten.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clear the screen and paint every row of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.run(fb, 0, y, fb.width())?;
    }
    painter.finish()?;
    Ok(())
}

/// Paint only the glyphs of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        painter.run(next, x, y, len)?;
    }
    painter.finish()?;
    Ok(())
}

/// Runs `(x, y, len)` of glyphs that differ, row by row.
///
/// A size mismatch marks every row dirty.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    let w = next.width();

    (0..next.height()).flat_map(move |y| {
        let mut runs = Vec::new();
        if !same_size {
            runs.push((0, y, w));
            return runs;
        }

        let differs = |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        while x < w {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
        runs
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let style = GlyphStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        for x in 1..=3 {
            b.put_char(x, 0, 'X', style);
        }

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(4, 3);
        assert_eq!(changed_runs(&a, &a.clone()).count(), 0);
    }

    #[test]
    fn identical_frames_encode_to_nothing() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", GlyphStyle::default());
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_redraw_positions_each_row() {
        let mut fb = FrameBuffer::new(2, 3);
        fb.put_str(0, 1, "hi", GlyphStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let s = text(&out);
        // MoveTo is 1-based on the wire.
        for row in 1..=3 {
            assert!(s.contains(&format!("\x1b[{};1H", row)));
        }
        assert!(s.contains("hi"));
        assert!(!s.contains("\r\n"));
    }

    #[test]
    fn same_style_is_emitted_once() {
        let red = GlyphStyle {
            fg: Rgb::new(255, 0, 0),
            ..GlyphStyle::default()
        };
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", red);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        assert_eq!(text(&out).matches("38;2;255;0;0").count(), 1);
    }

    #[test]
    fn color_change_keeps_attributes() {
        let bold_red = GlyphStyle {
            fg: Rgb::new(255, 0, 0),
            bold: true,
            ..GlyphStyle::default()
        };
        let bold_blue = GlyphStyle {
            fg: Rgb::new(0, 0, 255),
            ..bold_red
        };
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, 'a', bold_red);
        fb.put_char(1, 0, 'b', bold_blue);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let s = text(&out);
        assert!(s.contains("38;2;0;0;255"));
        // Bold is set once for the first glyph and not re-sent for the second.
        assert_eq!(s.matches("\x1b[1m").count(), 1);
    }

    #[test]
    fn rgb_converts_to_true_color() {
        assert_eq!(
            Color::from(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn draw_swap_full_then_diff() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let style = GlyphStyle::default();

        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", style);
        renderer.draw_swap(&mut fb).unwrap();
        let full_len = renderer.writer().len();
        assert!(full_len > 0);

        // Same content again: nothing to send.
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", style);
        renderer.draw_swap(&mut fb).unwrap();
        assert_eq!(renderer.writer().len(), full_len);

        // One glyph changed: a short diff.
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abd", style);
        renderer.draw_swap(&mut fb).unwrap();
        let diff = &renderer.writer()[full_len..];
        assert!(!diff.is_empty() && diff.len() < full_len);
        let diff = text(diff);
        assert!(diff.contains("\x1b[1;3H"));
        assert!(diff.contains('d'));
        assert!(!diff.contains('a') && !diff.contains('b'));
    }

    #[test]
    fn invalidate_forces_full_redraw() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(2, 1);
        renderer.draw_swap(&mut fb).unwrap();
        let first = renderer.writer().len();

        renderer.invalidate();
        let mut fb = FrameBuffer::new(2, 1);
        renderer.draw_swap(&mut fb).unwrap();
        assert_eq!(renderer.writer().len(), first * 2);
    }
}
