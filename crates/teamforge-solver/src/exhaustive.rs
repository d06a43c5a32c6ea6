//! Exhaustive search over every 5-vs-5 split.
//!
//! Team A ranges over all C(10, 5) = 252 five-member subsets in
//! lexicographic order and team B is the ascending complement. The first
//! split reaching the highest score wins, so without jitter the result is
//! deterministic and provably optimal.

use std::time::Instant;

use teamforge_core::{PlayerIndex, TeamSplit, ROSTER_SIZE, TEAM_SIZE};
use tracing::info;

use crate::{SearchOutcome, SearchStatistics};

/// Number of distinct team A choices.
pub const PARTITION_COUNT: u64 = 252;

/// Enumerates and scores every split.
///
/// # Example
///
/// ```
/// use teamforge_solver::ExhaustiveSearch;
///
/// // Prefer team A to hold low player indices.
/// let outcome = ExhaustiveSearch::new()
///     .solve(|split| -(split.team_a.iter().sum::<usize>() as f64));
/// assert_eq!(outcome.split.team_a, [0, 1, 2, 3, 4]);
/// assert_eq!(outcome.statistics.score_calculations, 252);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self
    }

    /// Scores every split and returns the best.
    pub fn solve<F>(&self, mut score_fn: F) -> SearchOutcome
    where
        F: FnMut(&TeamSplit) -> f64,
    {
        let start = Instant::now();
        info!(
            event = "search_start",
            search = "ExhaustiveSearch",
            partitions = PARTITION_COUNT,
        );

        let mut statistics = SearchStatistics::default();
        let mut best: Option<(TeamSplit, f64)> = None;
        let mut initial_score = f64::NEG_INFINITY;

        for team_a in Combinations::new() {
            let split = TeamSplit::with_complement(team_a);
            let score = score_fn(&split);
            statistics.score_calculations += 1;
            statistics.candidates += 1;
            match best {
                None => {
                    initial_score = score;
                    best = Some((split, score));
                }
                Some((_, best_score)) if score > best_score => best = Some((split, score)),
                Some(_) => {}
            }
        }

        statistics.duration = start.elapsed();
        let (split, score) = best.unwrap_or_else(|| {
            let split = TeamSplit::with_complement([0, 1, 2, 3, 4]);
            (split, f64::NEG_INFINITY)
        });

        info!(
            event = "search_end",
            search = "ExhaustiveSearch",
            duration_ms = statistics.duration.as_millis() as u64,
            score_calculations = statistics.score_calculations,
            speed = statistics.calculation_speed(),
            score = score,
        );

        SearchOutcome {
            split,
            score,
            initial_score,
            statistics,
        }
    }
}

/// Lexicographic 5-combinations of `0..10`.
struct Combinations {
    indices: [PlayerIndex; TEAM_SIZE],
    done: bool,
}

impl Combinations {
    fn new() -> Self {
        Self {
            indices: [0, 1, 2, 3, 4],
            done: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = [PlayerIndex; TEAM_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices;

        // Advance the rightmost index that still has room.
        match (0..TEAM_SIZE).rev().find(|&i| self.indices[i] < ROSTER_SIZE - TEAM_SIZE + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..TEAM_SIZE {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}
