//! RNG module - repeat-avoiding color randomizer
//!
//! [`Randomizer`] draws values in `[0, max)` and re-rolls values that were
//! produced recently, so the same color rarely shows up twice in a row. The
//! number of re-rolls is bounded: when every attempt collides with the history
//! the last attempt is returned as-is and a repeat is accepted.
//!
//! Also provides a simple LCG so draws are deterministic for a given seed.

use tracing::trace;

use crate::history::History;
use crate::types::{DEFAULT_HISTORY_LEN, DEFAULT_ROLLS};

/// Source of uniform draws used by [`Randomizer`]
pub trait RandomSource {
    /// Draw a value in `[0, max)`; `max` is never 0
    fn next_range(&mut self, max: u32) -> u32;
}

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

    /// Current state (feeding it back into `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Draws values while steering clear of the last few results
#[derive(Debug, Clone)]
pub struct Randomizer<R = SimpleRng> {
    history: History,
    rolls: u32,
    rng: R,
}

impl Randomizer<SimpleRng> {
    /// Create a randomizer with the default seed
    pub fn new(history_len: usize, rolls: u32) -> Self {
        Self::with_seed(history_len, rolls, 1)
    }

    /// Create a randomizer with an explicit seed
    pub fn with_seed(history_len: usize, rolls: u32, seed: u32) -> Self {
        Self::with_source(history_len, rolls, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Randomizer<R> {
    /// Create a randomizer on top of any [`RandomSource`].
    ///
    /// `rolls` is clamped to at least 1 so every draw produces a value.
    pub fn with_source(history_len: usize, rolls: u32, rng: R) -> Self {
        Self {
            history: History::new(history_len),
            rolls: rolls.max(1),
            rng,
        }
    }

    /// Draw a value in `[0, max)`, avoiding recently drawn values.
    ///
    /// Makes at most `rolls` draws. The first draw not in the history is
    /// recorded and returned. If all of them collide, the last draw is returned
    /// without being recorded. `max == 0` has no valid value and returns 0
    /// without drawing.
    pub fn next(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }

        let mut value = 0;
        for _ in 0..self.rolls {
            value = self.rng.next_range(max);
            if !self.history.contains(value) {
                self.history.push(value);
                return value;
            }
        }

        trace!(value, max, rolls = self.rolls, "randomizer accepted a repeat");
        value
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Forget recent draws (the underlying RNG keeps its state)
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Randomizer<SimpleRng> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN, DEFAULT_ROLLS)
    }
}
