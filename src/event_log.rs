//! JSON-lines event log.
//!
//! Enabled with `BLOCKFALL_LOG_PATH`. Every lock and game-over becomes one
//! line appended to the file. Write failures disable the log for the rest of
//! the run instead of interrupting play.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::core::{GameObserver, LockEvent};

pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "lock")]
    Lock,
    #[serde(rename = "game_over")]
    GameOver,
}

/// One logged line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub seq: u64,
    /// Milliseconds since the Unix epoch
    pub ts: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_cleared: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    pub score: u32,
    pub lines: u32,
    #[serde(default)]
    pub game_over: bool,
}

pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
    failed: bool,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("event log: open {} failed: {}", path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Open the file named by `BLOCKFALL_LOG_PATH`, if set and non-empty.
    pub fn from_env() -> Result<Option<Self>> {
        let path = env::var(LOG_PATH_VAR)
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        path.map(|p| Self::open(&p)).transpose()
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
            failed: false,
        }
    }

    /// Records written so far
    pub fn written(&self) -> u64 {
        self.seq
    }

    /// A write failed and the log stopped
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, mut record: EventRecord) {
        if self.failed {
            return;
        }
        record.seq = self.seq;

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if self.out.write_all(&self.buf).and_then(|_| self.out.flush()).is_err() {
            self.failed = true;
            return;
        }
        self.seq += 1;
    }
}

impl<W: Write> GameObserver for EventLog<W> {
    fn on_lock(&mut self, event: &LockEvent) {
        self.write_record(EventRecord {
            record_type: RecordType::Lock,
            seq: 0,
            ts: now_ms(),
            lines_cleared: Some(event.lines_cleared),
            points: Some(event.points),
            score: event.score,
            lines: event.lines,
            game_over: event.game_over,
        });
    }

    fn on_game_over(&mut self, score: u32, lines: u32) {
        self.write_record(EventRecord {
            record_type: RecordType::GameOver,
            seq: 0,
            ts: now_ms(),
            lines_cleared: None,
            points: None,
            score,
            lines,
            game_over: true,
        });
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
