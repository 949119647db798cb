//! Player implementations behind the [`MoveSource`] trait: uniform random,
//! console human, and the bucket-reinforcement learner.

mod agent;
mod human;
mod learning;
mod random;

pub use agent::{Lifecycle, MoveSource};
pub use human::HumanAgent;
pub use learning::LearningAgent;
pub use random::RandomAgent;
