use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::MAX_TAKE;

use super::agent::MoveSource;

/// An agent that takes a uniformly random legal number of sticks.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn play(&mut self, pile: u32) -> u32 {
        assert!(pile >= 1, "no sticks left to take");
        self.rng.random_range(1..=MAX_TAKE.min(pile))
    }
}
