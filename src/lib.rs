//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blockfall::{core,input,term,types}` and adds the
//! runner-side pieces: command-line parsing and the JSON-lines event log.

pub mod cli;
pub mod event_log;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
