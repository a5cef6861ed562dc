//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Horizontal side of the goal the keeper dives toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiveDirection {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical band of the goal the keeper dives toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiveHeight {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl DiveHeight {
    /// Height band for a zone row (0 = top).
    pub fn from_row(row: usize) -> Self {
        match row {
            0 => DiveHeight::Top,
            1 => DiveHeight::Middle,
            _ => DiveHeight::Bottom,
        }
    }
}

/// Result of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Save,
    Goal,
    Miss,
}

impl AttemptOutcome {
    /// Whether the attempt counts for the keeper.
    pub fn favours_keeper(&self) -> bool {
        matches!(self, AttemptOutcome::Save | AttemptOutcome::Miss)
    }
}

/// Match lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    NotStarted,
    InProgress,
    Over,
}

/// Final result once a match is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    PlayerWin,
    KeeperWin,
    Draw,
}

impl MatchResult {
    /// Compare final scores.
    pub fn from_scores(player: u32, keeper: u32) -> Self {
        match player.cmp(&keeper) {
            std::cmp::Ordering::Greater => MatchResult::PlayerWin,
            std::cmp::Ordering::Less => MatchResult::KeeperWin,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }
}

/// Goalkeeper skill preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    /// Explicit read probability in 0.0..=1.0.
    Custom(f64),
}

impl Difficulty {
    /// Probability that the keeper reads the shot correctly.
    pub fn read_probability(&self) -> f64 {
        match self {
            Difficulty::Easy => GOALKEEPER_DIFFICULTY_EASY,
            Difficulty::Medium => GOALKEEPER_DIFFICULTY_MEDIUM,
            Difficulty::Hard => GOALKEEPER_DIFFICULTY_HARD,
            Difficulty::Custom(p) => *p,
        }
    }
}

/// What the keeper body is doing, for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeeperPose {
    #[default]
    Ready,
    /// Leaning toward the dive side during the reaction window.
    Anticipating,
    Diving,
    Celebrating,
    Disappointed,
}
