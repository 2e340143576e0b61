//! Session loop driver
//!
//! A [`Session`] owns one [`GameState`], the gravity [`DropClock`] and the
//! registered observers. The host calls [`Session::frame`] once per frame with
//! the elapsed time and the intents collected since the previous frame.
//!
//! Frame order:
//! 1. Advance the clock; if a drop is due, soft-drop once.
//! 2. Apply queued intents in arrival order. A player soft drop restarts the
//!    gravity interval.
//! 3. Forward buffered lock/game-over events to every observer.

use crate::clock::DropClock;
use crate::config::GameConfig;
use crate::game_state::{DropOutcome, GameState};
use crate::observer::{dispatch, GameObserver};
use crate::rng::PieceQueue;
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Summary of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Gravity fired this frame
    pub gravity: bool,
    /// Intents that changed the state
    pub applied: u32,
    /// Pieces locked this frame (gravity or player)
    pub locks: u32,
    pub lines_cleared: u32,
}

pub struct Session {
    config: GameConfig,
    state: GameState,
    clock: DropClock,
    observers: Vec<Box<dyn GameObserver>>,
    /// Sessions started so far, including the current one
    games: u32,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("observers", &self.observers.len())
            .field("games", &self.games)
            .finish()
    }
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        let state = GameState::new(&config);
        Self::from_state(config, state)
    }

    /// Wrap an already-built state (scripted queues, prepared grids)
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            clock: DropClock::new(config.drop_interval_ms),
            config,
            state,
            observers: Vec::new(),
            games: 1,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Start a fresh game: empty grid, zero score, new first piece.
    ///
    /// The RNG continues from where the previous game left it, so consecutive
    /// games differ while the whole run stays reproducible from the seed.
    /// Observers stay registered.
    pub fn start(&mut self) {
        let queue = PieceQueue::new(self.state.queue().seed());
        self.state = GameState::with_queue(&self.config, queue);
        self.clock.reset();
        self.games = self.games.wrapping_add(1);
        self.flush_events();
    }

    /// Run one frame. See the module docs for ordering.
    pub fn frame(&mut self, elapsed_ms: u32, intents: &[GameAction]) -> FrameReport {
        let mut report = FrameReport::default();

        if !self.state.is_game_over() && self.clock.advance(elapsed_ms) {
            report.gravity = true;
            note_drop(self.state.soft_drop(), &mut report);
        }

        for &action in intents {
            if self.apply_counted(action, &mut report) {
                report.applied += 1;
            }
        }

        self.flush_events();
        report
    }

    /// Apply a single intent outside of a frame; events are forwarded at once.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let mut report = FrameReport::default();
        let changed = self.apply_counted(action, &mut report);
        self.flush_events();
        changed
    }

    fn apply_counted(&mut self, action: GameAction, report: &mut FrameReport) -> bool {
        match action {
            GameAction::SoftDrop => {
                let outcome = self.state.soft_drop();
                if outcome == DropOutcome::Ignored {
                    return false;
                }
                self.clock.reset();
                note_drop(outcome, report);
                true
            }
            other => self.state.apply_action(other),
        }
    }

    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            for observer in self.observers.iter_mut() {
                dispatch(observer.as_mut(), &event);
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &DropClock {
        &self.clock
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }
}

fn note_drop(outcome: DropOutcome, report: &mut FrameReport) {
    if let DropOutcome::Locked(lock) = outcome {
        report.locks += 1;
        report.lines_cleared += lock.lines_cleared;
    }
}
