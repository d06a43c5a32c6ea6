//! TeamForge Solver - search engines over 5-vs-5 splits
//!
//! This crate provides:
//! - [`ExhaustiveSearch`]: scores all 252 ways to pick team A
//! - [`LocalSearch`]: budget-bounded depth-first hill climbing over
//!   pairwise slot swaps from a random start
//! - [`SlotSwap`] moves and the [`SlotSwapSelector`] neighbourhood
//! - [`MoveBudget`] termination and [`SearchStatistics`]
//!
//! Both engines take the score function as a closure, so they know
//! nothing about preferences or matchers.

pub mod exhaustive;
pub mod local_search;
pub mod moves;
pub mod statistics;
pub mod termination;

use teamforge_core::TeamSplit;

pub use exhaustive::ExhaustiveSearch;
pub use local_search::{Candidate, LocalSearch};
pub use moves::{SlotSwap, SlotSwapSelector, NEIGHBORHOOD_SIZE};
pub use statistics::SearchStatistics;
pub use termination::MoveBudget;

#[cfg(test)]
mod tests;

/// The winning split of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub split: TeamSplit,
    pub score: f64,
    /// Score of the starting split (local search) or of the first
    /// enumerated split (exhaustive search).
    pub initial_score: f64,
    pub statistics: SearchStatistics,
}
