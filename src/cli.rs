//! Command-line parsing for the runner.
//!
//! Flags override whatever [`GameConfig::from_env`] produced, so precedence is
//! flag > environment > default.

use anyhow::{anyhow, Result};

use crate::core::{GameConfig, MAX_BOARD_DIM};

pub const USAGE: &str = "\
usage: tui-blockfall [--width N] [--height N] [--drop-ms MS] [--seed N]

keys: arrows/hjkl/wasd move, up/k/w/space rotate, down/j/s drop,
      r restart, q or ctrl-c quit

env:  BLOCKFALL_WIDTH BLOCKFALL_HEIGHT BLOCKFALL_DROP_MS BLOCKFALL_SEED
      BLOCKFALL_LOG_PATH (append lock/game-over events as JSON lines)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(GameConfig),
    Help,
}

/// Parse runner arguments (without the program name) on top of `config`.
pub fn parse_args(args: &[String], mut config: GameConfig) -> Result<CliCommand> {
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--width" => config.width = parse_value(args, &mut i, flag)?,
            "--height" => config.height = parse_value(args, &mut i, flag)?,
            "--drop-ms" => config.drop_interval_ms = parse_value(args, &mut i, flag)?,
            "--seed" => config.seed = parse_value(args, &mut i, flag)?,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    let side = 1..=MAX_BOARD_DIM;
    if !side.contains(&config.width) || !side.contains(&config.height) {
        return Err(anyhow!(
            "board sides must be between 1 and {}, got {}x{}",
            MAX_BOARD_DIM,
            config.width,
            config.height
        ));
    }

    Ok(CliCommand::Play(config))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
