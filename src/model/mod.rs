//! The learner's decision core: per-pile-size move buckets with win
//! reinforcement, and the text file they persist to.

mod buckets;
mod store;

pub use buckets::{default_buckets, BucketModel, DEFAULT_BUCKET, TRACKED_PILE_MAX};
pub use store::MoveStore;
