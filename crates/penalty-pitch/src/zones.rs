//! ZoneGrid: the goal mouth split into a 3×3 grid of named zones.

use penalty_core::constants::{ZONE_COUNT, ZONE_GRID_SIZE};
use penalty_core::types::{Point, Rect, Zone};
use penalty_core::{PenaltyError, Result};

/// The nine goal zones, row-major (0 = top-left, 8 = bottom-right).
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGrid {
    bounds: Rect,
    zones: Vec<Zone>,
    /// Column edges, left to right.
    xs: [f64; ZONE_GRID_SIZE + 1],
    /// Row edges, top to bottom.
    ys: [f64; ZONE_GRID_SIZE + 1],
}

impl ZoneGrid {
    /// Split `bounds` into the 3×3 grid.
    pub fn new(bounds: Rect) -> Result<Self> {
        if !bounds.is_valid() {
            return Err(PenaltyError::InvalidGoalBounds);
        }

        let n = ZONE_GRID_SIZE as f64;
        // Shared edges are computed once so neighbours meet exactly.
        let xs: [f64; ZONE_GRID_SIZE + 1] =
            std::array::from_fn(|i| bounds.x + bounds.width * i as f64 / n);
        let ys: [f64; ZONE_GRID_SIZE + 1] =
            std::array::from_fn(|i| bounds.y + bounds.height * i as f64 / n);

        let mut zones = Vec::with_capacity(ZONE_COUNT);
        for row in 0..ZONE_GRID_SIZE {
            for col in 0..ZONE_GRID_SIZE {
                zones.push(Zone {
                    index: row * ZONE_GRID_SIZE + col,
                    row,
                    col,
                    bounds: Rect::new(xs[col], ys[row], xs[col + 1] - xs[col], ys[row + 1] - ys[row]),
                });
            }
        }

        Ok(Self {
            bounds,
            zones,
            xs,
            ys,
        })
    }

    /// The whole goal rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Direct lookup by row-major index.
    pub fn zone_at(&self, index: usize) -> Result<&Zone> {
        self.zones.get(index).ok_or(PenaltyError::ZoneIndexOutOfRange {
            index,
            count: self.zones.len(),
        })
    }

    /// Zone containing `point`, or None when the point is outside the goal.
    ///
    /// Interior edges belong to the zone right of / below them; the goal's
    /// own outer edges count as inside.
    pub fn zone_containing(&self, point: Point) -> Option<&Zone> {
        if !self.bounds.contains(point) {
            return None;
        }
        let col = self.xs[1..ZONE_GRID_SIZE]
            .iter()
            .filter(|&&edge| point.x >= edge)
            .count();
        let row = self.ys[1..ZONE_GRID_SIZE]
            .iter()
            .filter(|&&edge| point.y >= edge)
            .count();
        self.zones.get(row * ZONE_GRID_SIZE + col)
    }

    /// Zone whose center is nearest to `point`. Ties keep the lower index.
    pub fn nearest_zone(&self, point: Point) -> Option<&Zone> {
        nearest_zone(&self.zones, point)
    }
}

/// Distances closer than this are treated as equal when ranking zones.
const DISTANCE_RESOLUTION: f64 = 1e6;

/// Distance quantized to micro-pixels, so geometric ties compare equal
/// despite floating-point noise.
pub fn distance_key(distance: f64) -> i64 {
    (distance * DISTANCE_RESOLUTION).round() as i64
}

/// Nearest zone center by Euclidean distance; ties keep the lower index.
pub fn nearest_zone(zones: &[Zone], point: Point) -> Option<&Zone> {
    zones
        .iter()
        .min_by_key(|z| (distance_key(z.center().distance_to(&point)), z.index))
}
