//! Core domain: shared resources for the level sequence and randomness.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::LevelDef;

/// Ordered list of levels and the one currently being played.
#[derive(Resource, Debug, Default)]
pub struct LevelSequence {
    stages: Vec<LevelDef>,
    current: usize,
}

impl LevelSequence {
    pub fn new(stages: Vec<LevelDef>) -> Self {
        Self { stages, current: 0 }
    }

    pub fn current(&self) -> Option<&LevelDef> {
        self.stages.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Move to the next level. Returns `false` once the sequence is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.stages.len() {
            self.current += 1;
            true
        } else {
            self.current = self.stages.len();
            false
        }
    }

    pub fn restart(&mut self) {
        self.current = 0;
    }
}

/// Seeded RNG shared by enemy decisions and loot rolls.
#[derive(Resource, Debug)]
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        info!("Gameplay RNG seed: {}", seed);
        Self::seeded(seed)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_seed_option(None)
    }
}
