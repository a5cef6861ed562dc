//! Core types and definitions for the penalty shootout simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry types, commands, snapshots, events, configuration and errors.
//! It has no dependency on any renderer or runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{ErrorKind, PenaltyError};

/// Result alias used by every crate in the workspace.
pub type Result<T> = std::result::Result<T, PenaltyError>;

#[cfg(test)]
mod tests;
