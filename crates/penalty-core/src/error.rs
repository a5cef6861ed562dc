//! Error taxonomy for the simulation core.
//!
//! Every error is recoverable by correcting the call. Misses and saves are
//! gameplay outcomes and never surface here.

use thiserror::Error;

use crate::enums::MatchPhase;

/// Broad class of a [`PenaltyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside its domain.
    InvalidInput,
    /// The call is not allowed in the current state.
    InvalidState,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PenaltyError {
    #[error("non-finite value for {what}")]
    NonFiniteInput { what: &'static str },

    #[error("maximum drag magnitude must be positive, got {max}")]
    InvalidDragLimit { max: f64 },

    #[error("shot power {power} outside 0..=100")]
    PowerOutOfRange { power: f64 },

    #[error("difficulty {value} outside 0..=1")]
    DifficultyOutOfRange { value: f64 },

    #[error("zone index {index} out of range (zone count {count})")]
    ZoneIndexOutOfRange { index: usize, count: usize },

    #[error("goal bounds must have positive, finite size")]
    InvalidGoalBounds,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("max attempts must be at least 1")]
    ZeroAttempts,

    #[error("no goal zones available")]
    NoZones,

    #[error("match is {phase:?}, expected {expected:?}")]
    WrongPhase {
        phase: MatchPhase,
        expected: MatchPhase,
    },

    #[error("a shot is already in flight")]
    ShotInFlight,
}

impl PenaltyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PenaltyError::NonFiniteInput { .. }
            | PenaltyError::InvalidDragLimit { .. }
            | PenaltyError::PowerOutOfRange { .. }
            | PenaltyError::DifficultyOutOfRange { .. }
            | PenaltyError::ZoneIndexOutOfRange { .. }
            | PenaltyError::InvalidGoalBounds
            | PenaltyError::InvalidConfig(_)
            | PenaltyError::ZeroAttempts => ErrorKind::InvalidInput,
            PenaltyError::NoZones
            | PenaltyError::WrongPhase { .. }
            | PenaltyError::ShotInFlight => ErrorKind::InvalidState,
        }
    }
}
