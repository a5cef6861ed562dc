//! Headless simulation for the penalty shootout.
//!
//! Owns match bookkeeping, animation progress and the cooldown between
//! attempts, processes player commands, and produces `GameStateSnapshot`s.
//! Clock and random source are injected, so a seeded engine driven by a
//! `ManualClock` replays exactly.

pub mod animation;
pub mod clock;
pub mod cooldown;
pub mod engine;
pub mod match_state;
pub mod resolver;
pub mod snapshot;

pub use penalty_core as core;
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{SimConfig, SimulationEngine};
pub use match_state::MatchStateMachine;
pub use resolver::resolve;
