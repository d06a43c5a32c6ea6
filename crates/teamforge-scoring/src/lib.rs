//! TeamForge Scoring - fairness objectives for two-team splits
//!
//! Every score function maps the two teams of a split to one `f64`.
//! Scores only rank splits produced by the same function on the same
//! preference matrix; they carry no meaning across matchers.
//!
//! - [`affinity`] - whole-team happiness and the fair/utilitarian strategies
//! - [`role_balance`] - per-slot log happiness with a mirror penalty
//! - [`rated`] - role balance extended with peer ratings and carry bias
//! - [`slots`] - reshaping a preference matrix into per-slot values
//! - [`jitter`] - optional tie-breaking noise

pub mod affinity;
pub mod jitter;
pub mod math;
pub mod rated;
pub mod role_balance;
pub mod slots;

use std::fmt::{Debug, Display};

pub use affinity::{team_happiness, AffinityStrategy};
pub use jitter::Jitter;
pub use rated::{RatedRoleBreakdown, RatedRoleScore, RATING_WEIGHTS};
pub use role_balance::{RoleBalanceBreakdown, RoleBalanceScore};
pub use slots::{SlotTable, TeamSlots};

/// A scored evaluation that can also render itself as a report.
pub trait ScoreBreakdown: Display + Debug {
    /// The scalar the search maximizes.
    fn score(&self) -> f64;
}

/// Scores a split from each team's per-slot values.
///
/// Implementations are pure: the same slots always give the same score.
/// Tie-breaking noise is layered on by the caller through [`Jitter`].
pub trait SlotScoreFunction: Send + Sync + Debug {
    type Breakdown: ScoreBreakdown;

    /// Computes every intermediate term of the score.
    fn evaluate(&self, team_a: &TeamSlots, team_b: &TeamSlots) -> Self::Breakdown;

    /// Computes only the final score.
    fn score(&self, team_a: &TeamSlots, team_b: &TeamSlots) -> f64 {
        self.evaluate(team_a, team_b).score()
    }
}

#[cfg(test)]
mod tests;
