//! Goalkeeper shot prediction.
//!
//! The keeper projects where the shot lands, finds the zone it is heading
//! for, then rolls against its (power-degraded) read probability. A misread
//! still lands near the truth: the keeper picks one of the three zones
//! closest to the correct one.

use tracing::debug;

use penalty_core::constants::{
    MAX_SHOT_POWER, POWER_DIFFICULTY_PENALTY, WRONG_ZONE_CANDIDATES, ZONE_GRID_SIZE,
};
use penalty_core::enums::{DiveDirection, DiveHeight};
use penalty_core::types::{GoalkeeperDecision, Point, Rect, ShotParameters, Zone};
use penalty_core::{PenaltyError, Result};
use penalty_pitch::shot::landing_point;
use penalty_pitch::zones::{distance_key, nearest_zone};

use crate::random::RandomSource;

/// Input to the predictor for a single shot.
#[derive(Debug, Clone, Copy)]
pub struct KeeperContext<'a> {
    pub shot: ShotParameters,
    /// Kick spot the shot is projected from.
    pub origin: Point,
    /// Read probability in 0.0..=1.0.
    pub difficulty: f64,
    pub zones: &'a [Zone],
    /// Goal mouth, for the dive direction bands.
    pub goal: Rect,
}

/// Decide where the keeper dives. Draws one value for the read, and a
/// second one only on a misread.
pub fn decide<R: RandomSource + ?Sized>(
    ctx: &KeeperContext<'_>,
    rng: &mut R,
) -> Result<GoalkeeperDecision> {
    if ctx.zones.is_empty() {
        return Err(PenaltyError::NoZones);
    }
    if !ctx.difficulty.is_finite() || !(0.0..=1.0).contains(&ctx.difficulty) {
        return Err(PenaltyError::DifficultyOutOfRange {
            value: ctx.difficulty,
        });
    }
    let power = ctx.shot.power;
    if !power.is_finite() || !(0.0..=MAX_SHOT_POWER).contains(&power) {
        return Err(PenaltyError::PowerOutOfRange { power });
    }

    let landing = landing_point(&ctx.shot, ctx.origin);
    let correct = nearest_zone(ctx.zones, landing).ok_or(PenaltyError::NoZones)?;

    let threshold = adjusted_difficulty(ctx.difficulty, power);
    let roll = rng.next_unit();

    let target = if roll < threshold {
        correct
    } else {
        let candidates = wrong_zone_candidates(ctx.zones, correct);
        if candidates.is_empty() {
            correct
        } else {
            let pool = candidates.len().min(WRONG_ZONE_CANDIDATES);
            candidates[rng.pick_index(pool)]
        }
    };

    let decision = GoalkeeperDecision {
        target_zone: *target,
        diving_direction: dive_direction(target, &ctx.goal),
        diving_height: DiveHeight::from_row(target.row),
        read_correctly: target.index == correct.index,
    };

    debug!(
        power,
        landing_x = landing.x,
        landing_y = landing.y,
        correct = correct.label(),
        target = target.label(),
        roll,
        threshold,
        "keeper decision"
    );

    Ok(decision)
}

/// Read probability after power degradation: a full-power shot halves it.
pub fn adjusted_difficulty(difficulty: f64, power: f64) -> f64 {
    difficulty * (1.0 - POWER_DIFFICULTY_PENALTY * power / MAX_SHOT_POWER)
}

/// All zones except `correct`, nearest center first. Distances are compared
/// at micro-pixel resolution so mirror-image zones tie and keep zone order.
pub fn wrong_zone_candidates<'a>(zones: &'a [Zone], correct: &Zone) -> Vec<&'a Zone> {
    let center = correct.center();
    let mut others: Vec<&Zone> = zones.iter().filter(|z| z.index != correct.index).collect();
    others.sort_by_key(|z| (distance_key(z.center().distance_to(&center)), z.index));
    others
}

/// Left/right when the zone center is outside the middle third of the goal.
pub fn dive_direction(zone: &Zone, goal: &Rect) -> DiveDirection {
    let x = zone.center().x;
    let center = goal.center().x;
    let half_band = goal.width / (2.0 * ZONE_GRID_SIZE as f64);
    if x < center - half_band {
        DiveDirection::Left
    } else if x > center + half_band {
        DiveDirection::Right
    } else {
        DiveDirection::Center
    }
}
