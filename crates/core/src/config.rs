//! Session configuration

use std::str::FromStr;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS};

/// Largest board side accepted from the environment or the command line.
pub const MAX_BOARD_DIM: u16 = 256;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub drop_interval_ms: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_WIDTH` / `BLOCKFALL_HEIGHT`: board size (default 12 x 20)
    /// - `BLOCKFALL_DROP_MS`: gravity interval (default 1000)
    /// - `BLOCKFALL_SEED`: RNG seed (default 1)
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            width: parse_var(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parse_var(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            drop_interval_ms: parse_var(&lookup, "BLOCKFALL_DROP_MS")
                .unwrap_or(defaults.drop_interval_ms),
            seed: parse_var(&lookup, "BLOCKFALL_SEED").unwrap_or(defaults.seed),
        }
        .sanitized()
    }

    /// Clamp each board side to `1..=MAX_BOARD_DIM`.
    pub fn sanitized(mut self) -> Self {
        self.width = self.width.clamp(1, MAX_BOARD_DIM);
        self.height = self.height.clamp(1, MAX_BOARD_DIM);
        self
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
