//! Human-readable account of why a split was chosen.

use std::fmt;

use serde::Serialize;

/// Diagnostic attached to a suggestion. Informational only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Explanation {
    /// Total happiness of team A and team B.
    Happiness(f64, f64),
    /// Multi-line score report.
    Report(String),
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Explanation::Happiness(a, b) => {
                write!(f, "Team 1 happiness {a:.4}, team 2 happiness {b:.4}")
            }
            Explanation::Report(report) => f.write_str(report),
        }
    }
}
