//! Session orchestration: repeated matches, aggregated statistics, and
//! console reporting.

mod runner;
mod stats;

pub use runner::{ConsoleSink, PileSelection, SessionConfig, SessionRunner};
pub use stats::SessionStats;
