//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides sample lobbies and brute-force helpers for testing.
//! It depends only on `teamforge-core` so every other crate can use it as
//! a dev-dependency without cycles.
//!
//! - [`lobby`] - sample preference matrices for each matcher
//! - [`partitions`] - enumeration of every 5-vs-5 split
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```

pub mod lobby;
pub mod partitions;

pub use lobby::{
    clustered_affinity, player_names, rated_lobby, role_lobby, uniform_affinity, ROLE_LOBBY,
};
pub use partitions::{all_team_a_choices, all_splits};
