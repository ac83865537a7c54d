//! Deterministic RNG for world generation and enemy movement.

use rand::distr::uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seeded PCG32 wrapper.
///
/// Everything random in the core draws from one of these, so a fixed seed
/// reproduces a world (and an enemy movement sequence) exactly.
#[derive(Debug, Clone)]
pub struct WorldRng {
    rng: Pcg32,
    seed: u64,
}

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform sample from `range`.
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}
