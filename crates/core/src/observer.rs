//! Events emitted by the engine and the observer seam that consumes them.
//!
//! The core buffers events as they happen; [`Session`](crate::Session)
//! drains them once per frame and forwards them to every registered observer.
//! Callers that drive a bare [`GameState`](crate::GameState) can poll
//! [`GameState::drain_events`](crate::GameState::drain_events) instead.

/// Result of one lock: what was cleared and the totals afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points this lock added (`100 * lines_cleared`)
    pub points: u32,
    pub score: u32,
    pub lines: u32,
    /// The replacement piece could not spawn
    pub game_over: bool,
}

/// Core-side event, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    Locked(LockEvent),
    /// Emitted exactly once, at the `Running -> GameOver` transition.
    GameOver { score: u32, lines: u32 },
}

/// Score/lines and game-over consumer.
///
/// Both methods default to no-ops so observers only implement what they need.
pub trait GameObserver {
    fn on_lock(&mut self, _event: &LockEvent) {}

    fn on_game_over(&mut self, _score: u32, _lines: u32) {}
}

/// Forward one event to an observer
pub fn dispatch(observer: &mut dyn GameObserver, event: &CoreEvent) {
    match event {
        CoreEvent::Locked(lock) => observer.on_lock(lock),
        CoreEvent::GameOver { score, lines } => observer.on_game_over(*score, *lines),
    }
}

/// Observer that records everything it sees; handy in tests and tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecorder {
    pub locks: Vec<LockEvent>,
    pub game_overs: Vec<(u32, u32)>,
}

impl GameObserver for EventRecorder {
    fn on_lock(&mut self, event: &LockEvent) {
        self.locks.push(*event);
    }

    fn on_game_over(&mut self, score: u32, lines: u32) {
        self.game_overs.push((score, lines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_routes_events() {
        let mut rec = EventRecorder::default();
        let lock = LockEvent {
            lines_cleared: 2,
            points: 200,
            score: 300,
            lines: 3,
            game_over: false,
        };
        dispatch(&mut rec, &CoreEvent::Locked(lock));
        dispatch(&mut rec, &CoreEvent::GameOver { score: 300, lines: 3 });

        assert_eq!(rec.locks, vec![lock]);
        assert_eq!(rec.game_overs, vec![(300, 3)]);
    }
}
