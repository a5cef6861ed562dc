//! Match state and the per-tick snapshot sent to the renderer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, Message};
use crate::types::{GoalkeeperDecision, Point, Rect, ShotParameters, SimTime};

/// Scoring and attempt bookkeeping for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub goalkeeper_score: u32,
    pub attempts: u32,
    pub max_attempts: u32,
    pub is_over: bool,
    pub phase: MatchPhase,
    /// Set when the match enters Over.
    pub result: Option<MatchResult>,
}

impl MatchState {
    /// Fresh, not-yet-started match.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            player_score: 0,
            goalkeeper_score: 0,
            attempts: 0,
            max_attempts,
            is_over: false,
            phase: MatchPhase::NotStarted,
            result: None,
        }
    }

    /// Attempts still to be taken.
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }
}

/// Complete state broadcast to the renderer after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub match_state: MatchState,
    pub difficulty: Difficulty,
    /// Whether a new drag may begin.
    pub can_shoot: bool,
    pub ball: BallView,
    pub keeper: KeeperView,
    pub goal: Rect,
    pub zones: Vec<ZoneView>,
    /// Present while the player is aiming.
    pub aim: Option<AimView>,
    pub events: Vec<GameEvent>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallView {
    pub position: Point,
    /// Drawn radius after perspective scaling.
    pub radius: f64,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeeperView {
    /// Occupied rectangle this tick; also the save hitbox.
    pub rect: Rect,
    pub pose: KeeperPose,
    pub diving: bool,
    /// Last decision, kept until the shot is reset.
    pub decision: Option<GoalkeeperDecision>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneView {
    pub index: usize,
    pub label: String,
    pub bounds: Rect,
}

/// Slingshot line and trajectory preview while dragging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimView {
    pub drag_start: Point,
    pub drag_current: Point,
    pub shot: ShotParameters,
    /// Empty when the shot is too weak to preview.
    pub preview: Vec<Point>,
}
