//! Shared types - plain data used by the core engine, input mapping and rendering
//!
//! Everything in this crate is dependency-free data: cells, colors, shape kinds,
//! player intents and the game constants. The core owns the behavior; this crate
//! only names things so that `core`, `input` and `term` agree on them.
//!
//! # Board Dimensions
//!
//! The default playfield is 12 columns by 20 rows, row 0 at the top. The core
//! accepts other sizes through its config, but dimensions are fixed once a
//! session starts.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal runner (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval (one row per second) |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Cell, Color, GameAction, ShapeKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//!
//! let cell = Cell::Filled(Color::Cyan);
//! assert!(cell.is_filled());
//! assert!(!Cell::Empty.is_filled());
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (12 columns)
pub const BOARD_WIDTH: u16 = 12;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: one row per second
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Largest shape matrix side (the I piece is 1x4 / 4x1)
pub const MAX_SHAPE_DIM: usize = 4;

/// The seven catalog shapes
///
/// Matrices, top row first (`#` = occupied):
/// - **I**: `####`
/// - **O**: `##` / `##`
/// - **T**: `###` / `.#.`
/// - **L**: `###` / `#..`
/// - **J**: `###` / `..#`
/// - **S**: `##.` / `.##`
/// - **Z**: `.##` / `##.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Catalog order used by uniform random selection
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Upper-case single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// Opaque color token of a filled cell.
///
/// Colors are picked independently of the shape, so the token carries no
/// meaning beyond how a renderer paints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Pink,
    Cyan,
    Turquoise,
    Coral,
    Yellow,
    Purple,
    Green,
}

impl Color {
    /// The fixed palette, in selection order
    pub const PALETTE: [Color; 7] = [
        Color::Pink,
        Color::Cyan,
        Color::Turquoise,
        Color::Coral,
        Color::Yellow,
        Color::Purple,
        Color::Green,
    ];

    /// 24-bit RGB value for renderers
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Pink => (0xFF, 0x3F, 0x8E),
            Color::Cyan => (0x04, 0xC2, 0xC9),
            Color::Turquoise => (0x2D, 0xE2, 0xE6),
            Color::Coral => (0xFF, 0x6B, 0x6B),
            Color::Yellow => (0xFF, 0xE6, 0x6D),
            Color::Purple => (0x7C, 0x4D, 0xFF),
            Color::Green => (0x2E, 0xCC, 0x71),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Pink => "pink",
            Color::Cyan => "cyan",
            Color::Turquoise => "turquoise",
            Color::Coral => "coral",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
        }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    #[inline(always)]
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// Player intents accepted by the core
///
/// These are the only entry points reachable from input. Restart and quit are
/// session/runner concerns and deliberately not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (with horizontal kicks)
    Rotate,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            _ => None,
        }
    }

    /// camelCase name (used in event logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
        }
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    /// Terminal for the session; only a new session leaves it.
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::GameOver => "gameOver",
        }
    }
}
