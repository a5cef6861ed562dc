//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Match control ---
    /// Start a match (or play again once a match is over).
    StartMatch,
    /// Abandon the current match and return to NotStarted.
    ResetMatch,
    /// Put the ball and keeper back for the next attempt.
    ResetShot,
    /// Change keeper skill.
    SetDifficulty { difficulty: Difficulty },

    // --- Aiming ---
    /// Pointer pressed at canvas coordinates.
    BeginDrag { x: f64, y: f64 },
    /// Pointer moved while pressed.
    DragTo { x: f64, y: f64 },
    /// Pointer released; shoots if the drag was strong enough.
    ReleaseDrag,
}
