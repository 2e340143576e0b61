//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and timing.
//! It has **no dependencies** on terminals, input devices, or I/O, so it runs
//! the same headless, in tests, and behind the terminal runner.
//!
//! - **Deterministic**: the same seed and the same intents produce the same game
//! - **Legal by construction**: moves are tested before they are committed
//! - **Allocation-free hot paths**: shape cells live in fixed-size `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`grid`]: variable-size board of colored cells, line clearing
//! - [`shape`]: the seven shape matrices and clockwise rotation
//! - [`collision`]: the single overlap/bounds test everything else uses
//! - [`kick`]: horizontal offsets tried when a rotation does not fit
//! - [`piece`]: the active piece and its spawn column
//! - [`rng`]: uniform shape/color selection, optionally scripted
//! - [`game_state`]: the piece controller (move, rotate, drop, lock, score)
//! - [`clock`]: gravity interval accounting
//! - [`session`]: per-frame driver that feeds observers
//! - [`observer`]: lock and game-over notifications
//! - [`snapshot`]: read-only copy for renderers
//! - [`config`]: board size, gravity and seed, from the environment
//!
//! # Rules
//!
//! - A spawned piece sits at the top row, horizontally centered (rounded left)
//! - Gravity moves the piece one row once the drop counter exceeds the interval
//! - A piece that cannot move down locks into the grid
//! - Every full row is removed; each one scores 100 points
//! - If the next piece cannot spawn the game is over
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameConfig, Session};
//! use tui_blockfall_types::GameAction;
//!
//! let mut session = Session::new(GameConfig::default());
//!
//! // One 16ms frame with two intents
//! session.frame(16, &[GameAction::MoveRight, GameAction::Rotate]);
//!
//! // Soft drops never score on their own
//! session.apply(GameAction::SoftDrop);
//! assert_eq!(session.state().score(), 0);
//! ```

pub mod clock;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod kick;
pub mod observer;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use clock::DropClock;
pub use collision::{collides, fits, landing_y};
pub use config::{GameConfig, MAX_BOARD_DIM};
pub use game_state::{DropOutcome, GameState};
pub use grid::Grid;
pub use kick::{kick_offsets, KickOffsets};
pub use observer::{dispatch, CoreEvent, EventRecorder, GameObserver, LockEvent};
pub use piece::{spawn_x, ActivePiece};
pub use rng::{PieceQueue, SimpleRng};
pub use session::{FrameReport, Session};
pub use shape::{rotate_clockwise, CellOffset, Shape, ShapeCells, MAX_SHAPE_CELLS};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
