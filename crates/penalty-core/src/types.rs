//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SHOT_POWER, MIN_SHOT_POWER};
use crate::error::PenaltyError;

/// 2D point in canvas space (pixels). x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    /// Linear interpolation toward `other` by `t` (unclamped).
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        self.to_vec().lerp(other.to_vec(), t).into()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

/// Axis-aligned rectangle. (x, y) is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose top-left corner is `origin`.
    pub fn at(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Positive, finite extent.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Power and direction of a shot, derived once per attempt from the drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotParameters {
    /// Shot power, 0..=100.
    pub power: f64,
    /// Launch angle in degrees. 0 = rightward, 90 = up the screen.
    pub angle_degrees: f64,
}

impl ShotParameters {
    /// Build shot parameters, rejecting power outside 0..=100.
    pub fn new(power: f64, angle_degrees: f64) -> Result<Self, PenaltyError> {
        if !power.is_finite() || !(0.0..=MAX_SHOT_POWER).contains(&power) {
            return Err(PenaltyError::PowerOutOfRange { power });
        }
        if !angle_degrees.is_finite() {
            return Err(PenaltyError::NonFiniteInput { what: "shot angle" });
        }
        Ok(Self {
            power,
            angle_degrees,
        })
    }

    /// Power as a fraction of the maximum (0.0 - 1.0).
    pub fn power_fraction(&self) -> f64 {
        self.power / MAX_SHOT_POWER
    }

    /// Unit launch direction in screen space (y flipped so 90° points up).
    pub fn direction(&self) -> DVec2 {
        let radians = self.angle_degrees.to_radians();
        DVec2::new(radians.cos(), -radians.sin())
    }

    /// Whether this shot is strong enough to count as an attempt.
    pub fn is_shootable(&self) -> bool {
        self.power > MIN_SHOT_POWER
    }
}

/// Simulation clock reading attached to every snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed.
    pub tick: u64,
    /// Clock reading at the last tick, in milliseconds.
    pub now_ms: f64,
}

impl SimTime {
    /// Advance by one tick to the given clock reading.
    pub fn advance(&mut self, now_ms: f64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}

/// Zone labels in row-major order.
const ZONE_LABELS: [[&str; 3]; 3] = [
    ["top-left", "top-center", "top-right"],
    ["middle-left", "middle-center", "middle-right"],
    ["bottom-left", "bottom-center", "bottom-right"],
];

/// One cell of the goal grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Row-major index, 0 = top-left.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub bounds: Rect,
}

impl Zone {
    /// Directional name, e.g. `"top-center"`.
    pub fn label(&self) -> &'static str {
        ZONE_LABELS
            .get(self.row)
            .and_then(|r| r.get(self.col))
            .copied()
            .unwrap_or("outside")
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}

/// Where the keeper goes for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalkeeperDecision {
    pub target_zone: Zone,
    pub diving_direction: crate::enums::DiveDirection,
    pub diving_height: crate::enums::DiveHeight,
    /// Whether the target is the zone the shot is heading for.
    pub read_correctly: bool,
}
