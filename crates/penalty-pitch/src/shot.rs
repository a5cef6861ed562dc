//! Slingshot shot parameters.
//!
//! The launch vector points from the current pointer position back to where
//! the drag started, so pulling the ball down and left fires it up and right.

use glam::DVec2;

use penalty_core::constants::{LANDING_DISTANCE_PER_POWER, MAX_SHOT_POWER};
use penalty_core::types::{Point, ShotParameters};
use penalty_core::{PenaltyError, Result};

/// Convert a launch vector into power and angle.
///
/// Magnitudes above `max_magnitude` are clamped first; the clamped vector
/// defines both power and angle. A zero vector yields power 0 at angle 0.
pub fn from_drag(drag: DVec2, max_magnitude: f64) -> Result<ShotParameters> {
    if !max_magnitude.is_finite() || max_magnitude <= 0.0 {
        return Err(PenaltyError::InvalidDragLimit { max: max_magnitude });
    }
    if !drag.is_finite() {
        return Err(PenaltyError::NonFiniteInput { what: "drag vector" });
    }

    let clamped = clamp_drag(drag, max_magnitude);
    let magnitude = clamped.length();
    if magnitude == 0.0 {
        return Ok(ShotParameters::default());
    }

    let power = if magnitude >= max_magnitude {
        MAX_SHOT_POWER
    } else {
        magnitude / max_magnitude * MAX_SHOT_POWER
    };
    // Screen y grows downward; negate so 90° is up the screen.
    let angle_degrees = (-clamped.y).atan2(clamped.x).to_degrees();

    ShotParameters::new(power, angle_degrees)
}

/// Shot parameters for a drag from `start` to the pointer at `current`.
pub fn from_drag_points(start: Point, current: Point, max_magnitude: f64) -> Result<ShotParameters> {
    from_drag(start.to_vec() - current.to_vec(), max_magnitude)
}

/// Limit a vector to `max_magnitude`, keeping its direction.
pub fn clamp_drag(drag: DVec2, max_magnitude: f64) -> DVec2 {
    drag.clamp_length_max(max_magnitude)
}

/// Pointer position after limiting the pull to `max_magnitude` from `start`.
pub fn clamp_pointer(start: Point, current: Point, max_magnitude: f64) -> Point {
    let pull = current.to_vec() - start.to_vec();
    (start.to_vec() + clamp_drag(pull, max_magnitude)).into()
}

/// Where a shot from `origin` comes to rest: `power × 4` pixels along the
/// launch direction.
pub fn landing_point(shot: &ShotParameters, origin: Point) -> Point {
    let distance = shot.power * LANDING_DISTANCE_PER_POWER;
    (origin.to_vec() + shot.direction() * distance).into()
}
