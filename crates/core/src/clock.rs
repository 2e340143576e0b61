//! Gravity timer
//!
//! Elapsed frame time accumulates into a drop counter. Once the counter is
//! strictly greater than the interval, one gravity drop is due and the counter
//! starts again from zero.

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    counter_ms: u32,
}

impl DropClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            counter_ms: 0,
        }
    }

    /// Add elapsed time; returns true when a gravity drop is due.
    ///
    /// At most one drop fires per call, however much time has passed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.counter_ms = self.counter_ms.saturating_add(elapsed_ms);
        if self.counter_ms > self.interval_ms {
            self.counter_ms = 0;
            return true;
        }
        false
    }

    /// Restart the interval (used after player-driven drops)
    pub fn reset(&mut self) {
        self.counter_ms = 0;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn counter_ms(&self) -> u32 {
        self.counter_ms
    }
}

impl Default for DropClock {
    fn default() -> Self {
        Self::new(DROP_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_exceeding_interval() {
        let mut clock = DropClock::new(1000);
        assert!(!clock.advance(500));
        assert!(!clock.advance(500)); // exactly 1000 is not "exceeded"
        assert!(clock.advance(1));
        assert_eq!(clock.counter_ms(), 0);
    }

    #[test]
    fn test_one_drop_per_advance() {
        let mut clock = DropClock::new(100);
        assert!(clock.advance(10_000));
        assert!(!clock.advance(0));
    }

    #[test]
    fn test_reset() {
        let mut clock = DropClock::default();
        assert_eq!(clock.interval_ms(), 1000);
        clock.advance(900);
        clock.reset();
        assert!(!clock.advance(900));
    }

    #[test]
    fn test_frame_paced_gravity() {
        let mut clock = DropClock::new(1000);
        let drops = (0..200).filter(|_| clock.advance(16)).count();
        // 16ms frames: fires on the 63rd frame (1008ms), 3 times in 3200ms
        assert_eq!(drops, 3);
    }
}
