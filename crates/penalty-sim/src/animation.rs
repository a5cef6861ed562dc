//! Time-based progress of the ball flight and the keeper dive.
//!
//! Both start at the kick instant and are sampled with the same `now_ms`
//! each tick; neither owns a timer.

use penalty_core::enums::KeeperPose;
use penalty_core::types::{Point, Rect};
use penalty_pitch::FlightPlan;

/// Ball travelling along its curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallFlight {
    pub plan: FlightPlan,
    pub started_ms: f64,
}

impl BallFlight {
    pub fn new(plan: FlightPlan, started_ms: f64) -> Self {
        Self { plan, started_ms }
    }

    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_ms).max(0.0)
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        self.plan.progress(self.elapsed(now_ms))
    }

    pub fn position(&self, now_ms: f64) -> Point {
        self.plan.position_at(self.progress(now_ms))
    }

    /// Drawn radius with perspective scaling applied.
    pub fn radius(&self, now_ms: f64, base_radius: f64) -> f64 {
        base_radius * self.plan.scale_at(self.position(now_ms))
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.plan.duration_ms
    }
}

/// Keeper box sliding linearly from its home to the dive target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeeperDive {
    pub from: Rect,
    pub to: Rect,
    pub started_ms: f64,
    /// Anticipation window before the diving pose.
    pub reaction_ms: f64,
    pub duration_ms: f64,
}

impl KeeperDive {
    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_ms).max(0.0)
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed(now_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn rect_at(&self, now_ms: f64) -> Rect {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let origin = self.from.origin().lerp(&self.to.origin(), t);
        Rect::at(origin, self.to.width, self.to.height)
    }

    pub fn pose_at(&self, now_ms: f64) -> KeeperPose {
        if self.elapsed(now_ms) < self.reaction_ms {
            KeeperPose::Anticipating
        } else {
            KeeperPose::Diving
        }
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
