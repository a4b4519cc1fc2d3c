//! Sources of uniform randomness.
//!
//! Everything random in the crate draws from a [`RandomSource`], so tests can
//! swap in [`SequenceRandom`] and pin the output.

use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

/// Produces uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Reproducible source, the same seed yields the same sequence. Used by tests.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Replays fixed values in order, starting over after the last one.
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
