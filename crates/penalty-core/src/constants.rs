//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::GameConfig`]; the engine
//! reads tunables from the config, never directly from here.

// --- Match ---

/// Attempts per match.
pub const MAX_ATTEMPTS: u32 = 5;

/// Delay between a resolved attempt and the next shot (ms).
pub const SHOT_COOLDOWN_MS: f64 = 2000.0;

// --- Canvas ---

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

// --- Goal ---

/// Goal width as a fraction of canvas width.
pub const GOAL_WIDTH_RATIO: f64 = 0.5;
/// Goal height as a fraction of canvas height.
pub const GOAL_HEIGHT_RATIO: f64 = 0.3;
/// Top edge of the goal as a fraction of canvas height.
pub const GOAL_Y_POSITION_RATIO: f64 = 0.1;

/// Rows and columns of the goal zone grid.
pub const ZONE_GRID_SIZE: usize = 3;
/// Total number of goal zones.
pub const ZONE_COUNT: usize = ZONE_GRID_SIZE * ZONE_GRID_SIZE;

// --- Ball ---

pub const BALL_RADIUS: f64 = 15.0;
/// Ball resting height as a fraction of canvas height.
pub const BALL_Y_POSITION_RATIO: f64 = 0.75;
/// Drag can only begin within this multiple of the ball radius.
pub const BALL_GRAB_RADIUS_FACTOR: f64 = 1.5;
/// Fraction of the gap to the pointer the ball closes each tick while dragging.
pub const BALL_DRAG_EASING: f64 = 0.5;
/// Smallest ball scale (at the shooter); grows to 1.0 at the goal plane.
pub const BALL_MIN_SCALE: f64 = 0.8;

// --- Shot ---

/// Longest drag that still adds power (pixels).
pub const MAX_DRAG_DISTANCE: f64 = 150.0;
pub const MAX_SHOT_POWER: f64 = 100.0;
/// Shots at or below this power are ignored.
pub const MIN_SHOT_POWER: f64 = 5.0;
/// Flight distance per unit of power (pixels).
pub const LANDING_DISTANCE_PER_POWER: f64 = 4.0;
/// Distance of the curve control point along the launch direction (pixels).
pub const CONTROL_POINT_DISTANCE: f64 = 100.0;
/// Upward lift of the control point at full power (pixels).
pub const CONTROL_POINT_LIFT: f64 = 100.0;

/// Ball flight duration at zero power (ms).
pub const BALL_ANIMATION_BASE_DURATION_MS: f64 = 1000.0;
/// Flight duration removed per unit of power (ms).
pub const BALL_DURATION_PER_POWER_MS: f64 = 5.0;

/// Trajectory preview sample step in curve parameter space.
pub const PREVIEW_T_STEP: f64 = 0.05;

// --- Goalkeeper ---

pub const GOALKEEPER_WIDTH: f64 = 60.0;
pub const GOALKEEPER_HEIGHT: f64 = 80.0;
/// Keeper dive animation length (ms).
pub const GOALKEEPER_ANIMATION_DURATION_MS: f64 = 500.0;
/// Anticipation window before the full dive pose (ms).
pub const GOALKEEPER_REACTION_TIME_MS: f64 = 300.0;

/// Probability of a correct read at each preset.
pub const GOALKEEPER_DIFFICULTY_EASY: f64 = 0.3;
pub const GOALKEEPER_DIFFICULTY_MEDIUM: f64 = 0.5;
pub const GOALKEEPER_DIFFICULTY_HARD: f64 = 0.7;

/// Read probability lost at full power, as a fraction of difficulty.
pub const POWER_DIFFICULTY_PENALTY: f64 = 0.5;
/// How many of the nearest wrong zones a misread chooses from.
pub const WRONG_ZONE_CANDIDATES: usize = 3;
