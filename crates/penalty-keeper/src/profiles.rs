//! Difficulty-specific keeper profiles.

use penalty_core::config::GameConfig;
use penalty_core::constants::*;
use penalty_core::enums::Difficulty;

/// Behavioral profile for a keeper skill level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeeperProfile {
    /// Probability of reading a zero-power shot correctly.
    pub read_probability: f64,
    /// Anticipation window before the dive pose (ms).
    pub reaction_ms: f64,
    /// Time to reach the dive target (ms).
    pub dive_duration_ms: f64,
}

/// Get the profile for a difficulty with default timings.
pub fn get_profile(difficulty: Difficulty) -> KeeperProfile {
    KeeperProfile {
        read_probability: difficulty.read_probability(),
        reaction_ms: GOALKEEPER_REACTION_TIME_MS,
        dive_duration_ms: GOALKEEPER_ANIMATION_DURATION_MS,
    }
}

impl KeeperProfile {
    /// Profile for `difficulty` with timings taken from `config`.
    pub fn from_config(difficulty: Difficulty, config: &GameConfig) -> Self {
        Self {
            reaction_ms: config.keeper_reaction_ms,
            dive_duration_ms: config.keeper_dive_duration_ms,
            ..get_profile(difficulty)
        }
    }
}
