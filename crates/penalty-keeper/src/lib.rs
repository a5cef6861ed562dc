//! Goalkeeper AI for the penalty shootout.
//!
//! Predicts where a shot is heading, decides whether the keeper reads it,
//! and picks a dive target. Pure functions over plain data; randomness
//! comes in through [`random::RandomSource`].

pub mod predictor;
pub mod profiles;
pub mod random;

pub use penalty_core as core;
pub use predictor::{decide, KeeperContext};
pub use random::RandomSource;

#[cfg(test)]
mod tests;
