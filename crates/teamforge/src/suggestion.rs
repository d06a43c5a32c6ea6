//! The result of one suggestion run.

use serde::Serialize;
use teamforge_core::{Roster, TeamSplit};
use teamforge_solver::{SearchOutcome, SearchStatistics};

use crate::explanation::Explanation;
use crate::registry::MatcherKind;

/// A suggested split together with how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub kind: MatcherKind,
    pub split: TeamSplit,
    /// Search score of the split, jitter included when enabled.
    pub score: f64,
    pub explanation: Explanation,
    pub statistics: SearchStatistics,
}

impl Suggestion {
    pub(crate) fn new(kind: MatcherKind, outcome: SearchOutcome, explanation: Explanation) -> Self {
        Self {
            kind,
            split: outcome.split,
            score: outcome.score,
            explanation,
            statistics: outcome.statistics,
        }
    }

    /// Maps the split back to player names.
    ///
    /// For the role matchers, the names come out in role order
    /// (top, jungle, mid, adc, support).
    pub fn named(&self, roster: &Roster) -> NamedSuggestion {
        let names = |team: &[usize]| -> Vec<String> {
            team.iter().map(|&p| roster.name(p).to_string()).collect()
        };
        NamedSuggestion {
            team1: names(&self.split.team_a),
            team2: names(&self.split.team_b),
            facts: self.explanation.clone(),
        }
    }
}

/// A suggestion as the surrounding service stores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSuggestion {
    pub team1: Vec<String>,
    pub team2: Vec<String>,
    pub facts: Explanation,
}
