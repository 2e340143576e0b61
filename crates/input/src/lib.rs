//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It knows
//! nothing about the game state; the runner forwards the resulting intents to
//! the session in the order they arrived.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{collect_intents, handle_key_event, is_restart, should_quit};
