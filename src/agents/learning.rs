use crate::error::StoreError;
use crate::model::{BucketModel, MoveStore};

use super::agent::{Lifecycle, MoveSource};

/// The adaptive player: samples moves from learned per-pile-size buckets
/// and reinforces the moves it made after every win. Losses change
/// nothing, so winning choices accumulate weight over many matches.
/// Learned state is persisted through the store and survives restarts.
pub struct LearningAgent {
    model: BucketModel,
    store: MoveStore,
}

impl LearningAgent {
    /// Load the bucket table from the store (defaults if absent).
    pub fn new(store: MoveStore) -> Result<Self, StoreError> {
        let buckets = store.load()?;
        Ok(LearningAgent {
            model: BucketModel::new(buckets),
            store,
        })
    }

    /// Deterministic sampling for tests.
    pub fn seeded(store: MoveStore, seed: u64) -> Result<Self, StoreError> {
        let buckets = store.load()?;
        Ok(LearningAgent {
            model: BucketModel::seeded(buckets, seed),
            store,
        })
    }

    pub fn model(&self) -> &BucketModel {
        &self.model
    }
}

impl MoveSource for LearningAgent {
    fn name(&self) -> &str {
        "Learner"
    }

    fn play(&mut self, pile: u32) -> u32 {
        self.model.choose_move(pile)
    }

    fn on_lifecycle(&mut self, signal: Lifecycle) {
        match signal {
            Lifecycle::Start => self.model.clear_recorded(),
            Lifecycle::Win => {
                self.model.reinforce_recorded();
                // Losing the save loses this match's learning, nothing more.
                if let Err(e) = self.store.save(self.model.buckets()) {
                    eprintln!("Warning: failed to save learned moves: {e}");
                }
            }
            Lifecycle::Loss => {}
        }
    }
}
