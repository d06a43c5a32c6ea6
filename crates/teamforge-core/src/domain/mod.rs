//! Domain types: roles, preferences, rosters and team splits.
//!
//! A lobby is always ten players split into two teams of five. Players
//! carry no identity beyond their roster position, so everything here is
//! indexed by [`PlayerIndex`].

mod preference;
mod role;
mod roster;
mod split;

pub use preference::{PreferenceMatrix, PreferenceVector};
pub use role::Role;
pub use roster::Roster;
pub use split::TeamSplit;

/// Position of a player within the fixed roster (0..10).
pub type PlayerIndex = usize;

/// Number of players in a lobby.
pub const ROSTER_SIZE: usize = 10;

/// Number of players on each team.
pub const TEAM_SIZE: usize = 5;

/// Floor used to keep logarithms and divisions finite.
pub const EPSILON: f64 = 1e-5;
