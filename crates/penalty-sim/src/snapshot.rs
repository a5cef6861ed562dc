//! Snapshot builders: read-only views over engine state.

use penalty_core::enums::{AttemptOutcome, KeeperPose};
use penalty_core::state::{AimView, BallView, ZoneView};
use penalty_core::types::{Point, ShotParameters};
use penalty_pitch::{flight, PitchLayout, ZoneGrid};

use crate::animation::{BallFlight, KeeperDive};

/// Pointer drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Ball position when the drag began.
    pub start: Point,
    /// Pointer, clamped to the maximum drag distance.
    pub current: Point,
    pub shot: ShotParameters,
}

pub fn build_zones(grid: &ZoneGrid) -> Vec<ZoneView> {
    grid.zones()
        .iter()
        .map(|z| ZoneView {
            index: z.index,
            label: z.label().to_string(),
            bounds: z.bounds,
        })
        .collect()
}

/// Ball view. A landed ball keeps its final perspective scale until the
/// shot is reset.
pub fn build_ball(
    position: Point,
    flight: Option<&BallFlight>,
    landed: Option<&BallFlight>,
    now_ms: f64,
    base_radius: f64,
) -> BallView {
    BallView {
        position,
        radius: flight
            .or(landed)
            .map_or(base_radius, |f| f.radius(now_ms, base_radius)),
        in_flight: flight.is_some(),
    }
}

/// Slingshot line plus trajectory preview. Preview is empty below the
/// minimum shot power.
pub fn build_aim(drag: &DragState, layout: &PitchLayout) -> AimView {
    let preview = flight::preview(&drag.shot, drag.start, layout.goal().origin());
    AimView {
        drag_start: drag.start,
        drag_current: drag.current,
        shot: drag.shot,
        preview,
    }
}

/// Keeper pose: reaction to the last outcome, else dive progress.
pub fn keeper_pose(
    outcome: Option<AttemptOutcome>,
    dive: Option<&KeeperDive>,
    now_ms: f64,
) -> KeeperPose {
    match (outcome, dive) {
        (Some(o), _) if o.favours_keeper() => KeeperPose::Celebrating,
        (Some(_), _) => KeeperPose::Disappointed,
        (None, Some(d)) => d.pose_at(now_ms),
        (None, None) => KeeperPose::Ready,
    }
}
