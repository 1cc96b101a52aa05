//! Owned random number source
//!
//! Only used at startup to place the square and pick its speed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seeded generator held by whoever needs randomness
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: Pcg32,
}

impl RandomSource {
    /// Seed from OS entropy so every run differs
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic generator for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]` (inclusive). Panics if `min > max`.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}
