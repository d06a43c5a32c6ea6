//! Fairness score for role-slot assignments.
//!
//! ```text
//! t_a, t_b       = sum of ln(h + eps) over each team's slots
//! fairness_bonus = sech2(t_a - t_b) * 5
//! diff_penalty   = sum over slots of (ln(h_a + 2) - ln(h_b + 2))^2 * 5
//! score          = t_a + t_b + fairness_bonus - diff_penalty
//! ```
//!
//! The log sums reward every slot being filled by someone confident in it.
//! The bonus rewards teams of equal total strength, and the penalty
//! catches a single lopsided lane even when totals balance out.

use std::fmt;

use teamforge_core::{EPSILON, TEAM_SIZE};

use crate::math::{mirror_term, sech2};
use crate::{ScoreBreakdown, SlotScoreFunction, TeamSlots};

/// Weight of the equal-strength bonus.
const FAIRNESS_WEIGHT: f64 = 5.0;

/// Score function for the role balance matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleBalanceScore {
    epsilon: f64,
}

impl RoleBalanceScore {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for RoleBalanceScore {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}

/// Every term of a role balance evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleBalanceBreakdown {
    pub happiness_a: [f64; TEAM_SIZE],
    pub happiness_b: [f64; TEAM_SIZE],
    pub team_a_score: f64,
    pub team_b_score: f64,
    pub fairness_bonus: f64,
    /// Mirror term per slot.
    pub differences: [f64; TEAM_SIZE],
    pub diff_penalty: f64,
}

impl RoleBalanceBreakdown {
    /// Sum of the positive terms.
    pub fn bonuses(&self) -> f64 {
        self.team_a_score + self.team_b_score + self.fairness_bonus
    }
}

impl ScoreBreakdown for RoleBalanceBreakdown {
    fn score(&self) -> f64 {
        self.bonuses() - self.diff_penalty
    }
}

impl SlotScoreFunction for RoleBalanceScore {
    type Breakdown = RoleBalanceBreakdown;

    fn evaluate(&self, team_a: &TeamSlots, team_b: &TeamSlots) -> RoleBalanceBreakdown {
        let log_sum = |h: &[f64; TEAM_SIZE]| {
            h.iter().map(|&x| (x + self.epsilon).ln()).sum::<f64>()
        };
        let team_a_score = log_sum(&team_a.happiness);
        let team_b_score = log_sum(&team_b.happiness);
        let fairness_bonus = sech2(team_a_score - team_b_score) * FAIRNESS_WEIGHT;

        let mut differences = [0.0; TEAM_SIZE];
        for (slot, diff) in differences.iter_mut().enumerate() {
            *diff = mirror_term(team_a.happiness[slot], team_b.happiness[slot]);
        }
        let diff_penalty = differences.iter().sum();

        RoleBalanceBreakdown {
            happiness_a: team_a.happiness,
            happiness_b: team_b.happiness,
            team_a_score,
            team_b_score,
            fairness_bonus,
            differences,
            diff_penalty,
        }
    }
}

impl fmt::Display for RoleBalanceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation metrics:")?;
        writeln!(f, "=======\nBonuses\n=======")?;
        writeln!(f, "Team 1 happiness  {:?}", self.happiness_a)?;
        writeln!(f, "Team 2 happiness  {:?}", self.happiness_b)?;
        writeln!(f, "Team 1 score        {:.4}", self.team_a_score)?;
        writeln!(f, "Team 2 score        {:.4}", self.team_b_score)?;
        writeln!(f, "Fairness bonus    + {:.4}", self.fairness_bonus)?;
        writeln!(f, "Calculation       = {:.4}", self.bonuses())?;
        writeln!(f)?;
        writeln!(f, "=========\nPenalties\n=========")?;
        let diffs: Vec<String> = self.differences.iter().map(|d| format!("{d:.4}")).collect();
        writeln!(f, "Differences       [{}]", diffs.join(", "))?;
        writeln!(f, "Calculation       {:.4}", self.diff_penalty)?;
        writeln!(f)?;
        writeln!(f, "=====\nScore\n=====")?;
        writeln!(f, "{:.4}", self.score())
    }
}
