//! Target-show selection for user workers.
//!
//! Randomness is an explicit, locally-owned source rather than shared mutable
//! RNG state, so the only synchronization points in the system are the gate
//! and the per-show mutexes. A scripted variant replaces randomness with a
//! supplied sequence, which makes final per-show totals reproducible across
//! runs regardless of scheduling.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Chooses which show each successive user targets.
#[derive(Debug)]
pub enum ShowPicker {
    /// Uniform over `1..=shows`, from a locally-owned generator.
    Uniform(SmallRng),
    /// Replays a fixed sequence of show ids, cycling if exhausted.
    Scripted(VecDeque<u32>),
}

impl ShowPicker {
    /// Uniform picker seeded from entropy.
    pub fn uniform() -> Self {
        Self::Uniform(SmallRng::from_entropy())
    }

    /// Uniform picker with a fixed seed, for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self::Uniform(SmallRng::seed_from_u64(seed))
    }

    /// Deterministic picker that hands out `targets` in order, cycling when
    /// the sequence runs out.
    pub fn scripted(targets: impl IntoIterator<Item = u32>) -> Self {
        Self::Scripted(targets.into_iter().collect())
    }

    /// Draws the next target show id in `1..=shows`.
    pub fn next_target(&mut self, shows: u32) -> u32 {
        match self {
            Self::Uniform(rng) => rng.gen_range(1..=shows),
            Self::Scripted(targets) => {
                let id = targets.pop_front().unwrap_or(1);
                targets.push_back(id);
                id
            }
        }
    }
}
