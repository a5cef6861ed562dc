//! Fixed pitch geometry derived from the canvas size.
//!
//! Built once when a session starts; the goal, kick spot and keeper home
//! never move afterwards.

use tracing::debug;

use penalty_core::config::GameConfig;
use penalty_core::types::{Point, Rect, Zone};
use penalty_core::Result;

use crate::zones::ZoneGrid;

#[derive(Debug, Clone, PartialEq)]
pub struct PitchLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Goal mouth split into zones.
    pub grid: ZoneGrid,
    /// Kick spot; every shot starts here.
    pub ball_origin: Point,
    pub ball_radius: f64,
    pub keeper_width: f64,
    pub keeper_height: f64,
}

impl PitchLayout {
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let goal_width = config.canvas_width * config.goal_width_ratio;
        let goal_height = config.canvas_height * config.goal_height_ratio;
        let goal = Rect::new(
            config.canvas_width / 2.0 - goal_width / 2.0,
            config.canvas_height * config.goal_y_ratio,
            goal_width,
            goal_height,
        );

        debug!(?goal, "pitch layout");

        Ok(Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            grid: ZoneGrid::new(goal)?,
            ball_origin: Point::new(
                config.canvas_width / 2.0,
                config.canvas_height * config.ball_y_ratio,
            ),
            ball_radius: config.ball_radius,
            keeper_width: config.keeper_width,
            keeper_height: config.keeper_height,
        })
    }

    pub fn goal(&self) -> Rect {
        self.grid.bounds()
    }

    /// Keeper box standing at `center`: centered horizontally, top edge a
    /// quarter of the keeper's height above it.
    pub fn keeper_rect_at(&self, center: Point) -> Rect {
        Rect::new(
            center.x - self.keeper_width / 2.0,
            center.y - self.keeper_height / 4.0,
            self.keeper_width,
            self.keeper_height,
        )
    }

    /// Keeper box before a dive, in the middle of the goal.
    pub fn keeper_home(&self) -> Rect {
        self.keeper_rect_at(self.goal().center())
    }

    /// Keeper box at the end of a dive into `zone`.
    pub fn keeper_target(&self, zone: &Zone) -> Rect {
        self.keeper_rect_at(zone.center())
    }

    /// Whether a pointer press at `p` grabs the resting ball.
    pub fn grabs_ball(&self, ball: Point, p: Point, grab_factor: f64) -> bool {
        ball.distance_to(&p) < self.ball_radius * grab_factor
    }
}
