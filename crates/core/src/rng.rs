//! RNG module - uniform piece and color selection
//!
//! Every spawn picks a shape kind uniformly from the catalog and, independently,
//! a color uniformly from the palette. A small LCG keeps games reproducible
//! from a seed.
//!
//! For tests and replays the queue can be scripted with a fixed sequence of
//! kinds; once the script is used up it falls back to random kinds.

use std::collections::VecDeque;

use crate::types::{Color, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Pick one element uniformly
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        items.get(idx).copied()
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of spawned pieces
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rng: SimpleRng,
    /// Kinds to hand out before falling back to random ones
    script: VecDeque<ShapeKind>,
}

impl PieceQueue {
    /// Random queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            script: VecDeque::new(),
        }
    }

    /// Queue that yields `kinds` in order first, then random kinds.
    pub fn scripted(kinds: &[ShapeKind], seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            script: kinds.iter().copied().collect(),
        }
    }

    /// Draw the next (kind, color) pair
    pub fn draw(&mut self) -> (ShapeKind, Color) {
        let kind = match self.script.pop_front() {
            Some(kind) => kind,
            None => self.rng.choose(&ShapeKind::ALL).unwrap_or(ShapeKind::I),
        };
        let color = self.rng.choose(&Color::PALETTE).unwrap_or(Color::Cyan);
        (kind, color)
    }

    /// Number of scripted kinds not yet drawn
    pub fn scripted_remaining(&self) -> usize {
        self.script.len()
    }

    /// Current RNG state; seeding a new queue with it continues the sequence
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
