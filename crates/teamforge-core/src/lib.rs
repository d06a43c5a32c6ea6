//! TeamForge Core - Core types for balancing two five-player teams
//!
//! This crate provides the fundamental abstractions for TeamForge:
//! - Roster constants and the fixed role slots
//! - Preference vectors and the ten-row preference matrix
//! - Team splits and the named roster they map back onto
//! - The crate-wide error type

pub mod domain;
pub mod error;

pub use domain::{
    PlayerIndex, PreferenceMatrix, PreferenceVector, Role, Roster, TeamSplit, EPSILON,
    ROSTER_SIZE, TEAM_SIZE,
};
pub use error::{Result, TeamForgeError};
