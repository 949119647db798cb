//! Core game logic: the turn-taking engine, match outcomes, and progress
//! events.

mod engine;
mod player;

pub use engine::{GameEngine, MatchEvent, MatchOutcome, NullSink, ProgressSink, MAX_TAKE, MIN_TAKE};
pub use player::PlayerSlot;
