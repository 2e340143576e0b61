//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! and layout libraries and instead renders into a plain framebuffer that is
//! then flushed to the terminal.
//!
//! Goals:
//! - Rendering is a pure function of a `GameSnapshot`
//! - Diffed output so only changed glyphs hit the terminal
//! - Precise control over aspect ratio (2 columns per board cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
