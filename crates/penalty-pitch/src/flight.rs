//! Ball flight planning along the quadratic curve.

use serde::{Deserialize, Serialize};

use penalty_core::constants::*;
use penalty_core::types::{Point, ShotParameters};

use crate::curve;
use crate::shot::landing_point;

/// Endpoints and timing of one ball flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    pub duration_ms: f64,
    /// Top edge of the goal; the ball reaches full size here.
    pub goal_plane_y: f64,
}

/// Plan a flight with the default base duration.
pub fn plan_ball_flight(shot: &ShotParameters, origin: Point, goal_origin: Point) -> FlightPlan {
    plan_ball_flight_with(shot, origin, goal_origin, BALL_ANIMATION_BASE_DURATION_MS)
}

/// Plan a flight. Stronger shots fly faster: `base − power × 5` ms.
pub fn plan_ball_flight_with(
    shot: &ShotParameters,
    origin: Point,
    goal_origin: Point,
    base_duration_ms: f64,
) -> FlightPlan {
    let dir = shot.direction();
    let control = origin.to_vec() + dir * CONTROL_POINT_DISTANCE;
    // Lift the apex toward the top of the screen in proportion to power.
    let lift = CONTROL_POINT_LIFT * shot.power_fraction();

    FlightPlan {
        start: origin,
        control: Point::new(control.x, control.y - lift),
        end: landing_point(shot, origin),
        duration_ms: (base_duration_ms - shot.power * BALL_DURATION_PER_POWER_MS).max(1.0),
        goal_plane_y: goal_origin.y,
    }
}

impl FlightPlan {
    /// Curve parameter after `elapsed_ms`, clamped to 0..=1.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Ball position at curve parameter `t` (clamped).
    pub fn position_at(&self, t: f64) -> Point {
        curve::evaluate(self.start, self.control, self.end, t.clamp(0.0, 1.0))
    }

    /// Perspective scale for a ball at `position`: 0.8 at the kick spot,
    /// 1.0 at the goal plane.
    pub fn scale_at(&self, position: Point) -> f64 {
        let span = self.start.y - self.goal_plane_y;
        if span.abs() < f64::EPSILON {
            return 1.0;
        }
        let normalized_height = 1.0 - (position.y - self.goal_plane_y) / span;
        BALL_MIN_SCALE + normalized_height * (1.0 - BALL_MIN_SCALE)
    }

    /// Polyline of the whole flight for drawing.
    pub fn polyline(&self) -> Vec<Point> {
        curve::sample(self.start, self.control, self.end, PREVIEW_T_STEP)
    }
}

/// Trajectory preview drawn while aiming. Empty for shots under the
/// minimum power.
pub fn preview(shot: &ShotParameters, origin: Point, goal_origin: Point) -> Vec<Point> {
    if shot.power < MIN_SHOT_POWER {
        return Vec::new();
    }
    plan_ball_flight(shot, origin, goal_origin).polyline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shot(power: f64, angle: f64) -> ShotParameters {
        ShotParameters::new(power, angle).unwrap()
    }

    #[test]
    fn test_duration_shrinks_with_power() {
        let origin = Point::new(400.0, 300.0);
        let goal = Point::new(200.0, 40.0);
        assert_relative_eq!(plan_ball_flight(&shot(0.0, 90.0), origin, goal).duration_ms, 1000.0);
        assert_relative_eq!(plan_ball_flight(&shot(40.0, 90.0), origin, goal).duration_ms, 800.0);
        assert_relative_eq!(plan_ball_flight(&shot(100.0, 90.0), origin, goal).duration_ms, 500.0);
    }

    #[test]
    fn test_straight_shot_geometry() {
        let plan = plan_ball_flight(&shot(50.0, 90.0), Point::new(400.0, 300.0), Point::new(200.0, 40.0));
        assert_relative_eq!(plan.end.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(plan.end.y, 100.0, epsilon = 1e-9);
        // 100px along the launch direction, lifted by 50.
        assert_relative_eq!(plan.control.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(plan.control.y, 150.0, epsilon = 1e-9);
        assert_eq!(plan.goal_plane_y, 40.0);
    }

    #[test]
    fn test_flight_endpoints() {
        let plan = plan_ball_flight(&shot(75.0, 120.0), Point::new(400.0, 300.0), Point::new(200.0, 40.0));
        assert_eq!(plan.position_at(0.0), plan.start);
        assert_eq!(plan.position_at(1.0), plan.end);
        assert_eq!(plan.position_at(3.0), plan.end);
        assert_eq!(plan.progress(-10.0), 0.0);
        assert_eq!(plan.progress(plan.duration_ms * 2.0), 1.0);
    }

    #[test]
    fn test_scale() {
        let plan = plan_ball_flight(&shot(50.0, 90.0), Point::new(400.0, 300.0), Point::new(200.0, 40.0));
        assert_relative_eq!(plan.scale_at(Point::new(400.0, 300.0)), 0.8);
        assert_relative_eq!(plan.scale_at(Point::new(400.0, 40.0)), 1.0);
        assert_relative_eq!(plan.scale_at(Point::new(400.0, 170.0)), 0.9);
    }

    #[test]
    fn test_scale_degenerate_span() {
        let plan = plan_ball_flight(&shot(50.0, 0.0), Point::new(0.0, 40.0), Point::new(0.0, 40.0));
        assert_eq!(plan.scale_at(Point::new(10.0, 10.0)), 1.0);
    }

    #[test]
    fn test_preview_threshold() {
        let origin = Point::new(400.0, 300.0);
        let goal = Point::new(200.0, 40.0);
        assert!(preview(&shot(4.9, 90.0), origin, goal).is_empty());
        let pts = preview(&shot(30.0, 90.0), origin, goal);
        assert_eq!(pts.len(), 21);
        assert_eq!(pts[0], origin);
    }
}
