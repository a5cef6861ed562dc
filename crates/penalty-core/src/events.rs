//! Events emitted by the simulation for audio, particles and UI text.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Point;

/// Feedback events for the frontend sound and effects layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Ball kicked.
    Kick { power: f64 },
    /// Keeper committed to a dive.
    KeeperDive {
        direction: DiveDirection,
        height: DiveHeight,
    },
    /// Ball went in; `position` is where to spawn the celebration burst.
    Goal { position: Point },
    Save { position: Point },
    Miss { position: Point },
    /// Match reached its attempt budget.
    MatchOver { result: MatchResult },
}

/// Status line for the UI message area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub tick: u64,
}

impl Message {
    pub fn new(text: impl Into<String>, tick: u64) -> Self {
        Self {
            text: text.into(),
            tick,
        }
    }
}
