//! Random source injected into the structure generator.
//!
//! Anything implementing `rand::Rng` is a `RandomSource`. Tests that need
//! exact layer counts use `ScriptedDraws` instead.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

/// Integer draws for the generator.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Returns `low` when `high <= low`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Deterministic generator state for a given seed.
pub fn seeded(seed: u64) -> Xoshiro256Plus {
    Xoshiro256Plus::seed_from_u64(seed)
}

/// Replays a fixed list of draws in order.
///
/// Each scripted value is clamped into the requested range; once the script
/// runs out every draw returns the range's lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws taken so far (including ones past the end of the script).
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedDraws {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.consumed += 1;
        match self.draws.pop_front() {
            Some(value) => value.clamp(low, high.max(low)),
            None => low,
        }
    }
}
