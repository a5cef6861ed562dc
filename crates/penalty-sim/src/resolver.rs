//! Attempt outcome classification.

use penalty_core::enums::AttemptOutcome;
use penalty_core::types::{Point, Rect, Zone};

/// Classify where the ball came to rest. The keeper is checked first, so a
/// ball inside both the keeper box and a zone is a save.
pub fn resolve(ball: Point, keeper: &Rect, zones: &[Zone]) -> AttemptOutcome {
    if keeper.contains(ball) {
        AttemptOutcome::Save
    } else if zones.iter().any(|z| z.bounds.contains(ball)) {
        AttemptOutcome::Goal
    } else {
        AttemptOutcome::Miss
    }
}

/// Status line shown after an attempt.
pub fn outcome_message(outcome: AttemptOutcome) -> &'static str {
    match outcome {
        AttemptOutcome::Goal => "GOAL!",
        AttemptOutcome::Save => "Saved by the goalkeeper!",
        AttemptOutcome::Miss => "Shot missed!",
    }
}
