//! Per-run search statistics.

use std::time::Duration;

/// Counters collected during one search run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Score function calls, including the one for the starting split.
    pub score_calculations: u64,
    /// Nodes whose neighbourhood was scored.
    pub expansions: u64,
    /// Splits offered to the final selection.
    pub candidates: u64,
    /// Whether the move budget ran out before the search tree did.
    pub budget_exhausted: bool,
    pub duration: Duration,
}

impl SearchStatistics {
    /// Score calculations per second, or 0 for an instantaneous run.
    pub fn calculation_speed(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.score_calculations as f64 / secs) as u64
        } else {
            0
        }
    }
}
