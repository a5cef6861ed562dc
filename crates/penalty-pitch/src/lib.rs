//! Pitch geometry for the penalty shootout.
//!
//! Curve evaluation, slingshot shot parameters, flight planning, the goal
//! zone grid and the canvas layout. Everything here is a pure function of
//! its inputs.

pub use penalty_core as core;

pub mod curve;
pub mod flight;
pub mod layout;
pub mod shot;
pub mod zones;

// Re-export key types for convenience.
pub use flight::{plan_ball_flight, FlightPlan};
pub use layout::PitchLayout;
pub use shot::{from_drag, landing_point};
pub use zones::ZoneGrid;
