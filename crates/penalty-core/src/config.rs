//! Tunable game configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! TOML file only needs the keys it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Difficulty;
use crate::error::PenaltyError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub cooldown_ms: f64,
    pub difficulty: Difficulty,

    pub canvas_width: f64,
    pub canvas_height: f64,

    pub goal_width_ratio: f64,
    pub goal_height_ratio: f64,
    pub goal_y_ratio: f64,

    pub ball_radius: f64,
    pub ball_y_ratio: f64,
    pub max_drag_distance: f64,
    pub ball_base_duration_ms: f64,

    pub keeper_width: f64,
    pub keeper_height: f64,
    pub keeper_dive_duration_ms: f64,
    pub keeper_reaction_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            cooldown_ms: SHOT_COOLDOWN_MS,
            difficulty: Difficulty::default(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            goal_width_ratio: GOAL_WIDTH_RATIO,
            goal_height_ratio: GOAL_HEIGHT_RATIO,
            goal_y_ratio: GOAL_Y_POSITION_RATIO,
            ball_radius: BALL_RADIUS,
            ball_y_ratio: BALL_Y_POSITION_RATIO,
            max_drag_distance: MAX_DRAG_DISTANCE,
            ball_base_duration_ms: BALL_ANIMATION_BASE_DURATION_MS,
            keeper_width: GOALKEEPER_WIDTH,
            keeper_height: GOALKEEPER_HEIGHT,
            keeper_dive_duration_ms: GOALKEEPER_ANIMATION_DURATION_MS,
            keeper_reaction_ms: GOALKEEPER_REACTION_TIME_MS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self, PenaltyError> {
        let config: GameConfig =
            toml::from_str(s).map_err(|e| PenaltyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, PenaltyError> {
        toml::to_string_pretty(self).map_err(|e| PenaltyError::InvalidConfig(e.to_string()))
    }

    /// Reject values that would make the geometry or timing degenerate.
    pub fn validate(&self) -> Result<(), PenaltyError> {
        if self.max_attempts == 0 {
            return Err(PenaltyError::ZeroAttempts);
        }

        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("goal_width_ratio", self.goal_width_ratio),
            ("goal_height_ratio", self.goal_height_ratio),
            ("ball_radius", self.ball_radius),
            ("max_drag_distance", self.max_drag_distance),
            ("keeper_width", self.keeper_width),
            ("keeper_height", self.keeper_height),
            ("keeper_dive_duration_ms", self.keeper_dive_duration_ms),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PenaltyError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("cooldown_ms", self.cooldown_ms),
            ("goal_y_ratio", self.goal_y_ratio),
            ("ball_y_ratio", self.ball_y_ratio),
            ("keeper_reaction_ms", self.keeper_reaction_ms),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PenaltyError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        // Full-power flights must still take some time.
        let fastest = self.ball_base_duration_ms - MAX_SHOT_POWER * BALL_DURATION_PER_POWER_MS;
        if !fastest.is_finite() || fastest <= 0.0 {
            return Err(PenaltyError::InvalidConfig(format!(
                "ball_base_duration_ms must exceed {}",
                MAX_SHOT_POWER * BALL_DURATION_PER_POWER_MS
            )));
        }

        let p = self.difficulty.read_probability();
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(PenaltyError::DifficultyOutOfRange { value: p });
        }

        Ok(())
    }
}
