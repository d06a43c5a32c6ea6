//! Whole-team happiness for the affinity matcher.

use std::fmt;
use std::str::FromStr;

use teamforge_core::{PlayerIndex, PreferenceMatrix, TeamForgeError, TEAM_SIZE};

/// Total affinity inside a team.
///
/// Sums `affinity[p][t]` over every member `p` and every member `t`,
/// including `p` itself.
pub fn team_happiness(matrix: &PreferenceMatrix, team: &[PlayerIndex; TEAM_SIZE]) -> f64 {
    team.iter()
        .map(|&p| team.iter().map(|&t| matrix.value(p, t)).sum::<f64>())
        .sum()
}

/// How two team happiness totals combine into one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AffinityStrategy {
    /// Sum of logs: favours splits where neither team is left unhappy.
    #[default]
    Fair,
    /// Plain sum of both totals.
    Utilitarian,
}

impl AffinityStrategy {
    /// Combines both teams' happiness.
    ///
    /// `Fair` floors each total at `epsilon` before taking the log, so a
    /// team with zero happiness scores `ln(epsilon)` rather than `-inf`.
    pub fn combine(self, happiness_a: f64, happiness_b: f64, epsilon: f64) -> f64 {
        match self {
            AffinityStrategy::Fair => {
                happiness_a.max(epsilon).ln() + happiness_b.max(epsilon).ln()
            }
            AffinityStrategy::Utilitarian => happiness_a + happiness_b,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AffinityStrategy::Fair => "fair",
            AffinityStrategy::Utilitarian => "utilitarian",
        }
    }
}

impl fmt::Display for AffinityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AffinityStrategy {
    type Err = TeamForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fair" => Ok(AffinityStrategy::Fair),
            "utilitarian" => Ok(AffinityStrategy::Utilitarian),
            other => Err(TeamForgeError::UnknownStrategy(other.to_string())),
        }
    }
}
