//! # Game of Sticks
//!
//! Two players alternately take 1–3 sticks from a shared pile; whoever
//! takes the last stick loses. Ships a uniform-random player, a console
//! human player, and a learning player that reinforces winning move
//! choices per pile size and persists them across sessions.
//!
//! ## Modules
//!
//! - [`game`] — Turn-taking engine: legality, forfeits, winner attribution
//! - [`agents`] — The [`MoveSource`](agents::MoveSource) trait and its players
//! - [`model`] — Move buckets, reinforcement rule, on-disk move store
//! - [`session`] — Match loop, statistics, console reporting
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agents;
pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod session;
