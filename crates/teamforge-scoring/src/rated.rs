//! Role balance with peer ratings and carry bias.
//!
//! Extends the role balance idea in three ways:
//!
//! - Slot happiness is scored with `(ln((h + eps)^2) + h^0.75) / 3`, which
//!   rewards confidence past the point where the pure log flattens out.
//! - Each player's peer rating (what the other nine said about them) is
//!   weighted by the slot they fill and both teams' totals are pushed
//!   towards each other.
//! - Lopsided mirrored slots are penalised twice: once symmetrically, and
//!   once as a signed bias scaled by how much the stronger side of that
//!   slot could take over the game ("carry potential"). Biases in the same
//!   direction add up; biases that cancel across slots are forgiven.

use std::fmt;

use teamforge_core::{Role, EPSILON, TEAM_SIZE};

use crate::math::{mirror_term, sech2, sign};
use crate::{ScoreBreakdown, SlotScoreFunction, TeamSlots};

/// Peer rating weight per role slot. Support matters least.
pub const RATING_WEIGHTS: [f64; TEAM_SIZE] = [1.0, 0.8, 1.0, 0.8, 0.5];

const FAIRNESS_WEIGHT: f64 = 3.0;
const RATING_FAIRNESS_WEIGHT: f64 = 3.0;
const RATING_MIRROR_WEIGHT: f64 = 0.04;
const CARRY_SCALE: f64 = 10.0;

/// Score function for the rated role balance matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedRoleScore {
    epsilon: f64,
    weights: [f64; TEAM_SIZE],
}

impl RatedRoleScore {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            weights: RATING_WEIGHTS,
        }
    }

    /// Replaces the per-slot rating weights.
    pub fn with_weights(mut self, weights: [f64; TEAM_SIZE]) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &[f64; TEAM_SIZE] {
        &self.weights
    }

    fn team_score(&self, happiness: &[f64; TEAM_SIZE]) -> f64 {
        happiness
            .iter()
            .map(|&h| ((h + self.epsilon) * (h + self.epsilon)).ln() + h.max(0.0).powf(0.75))
            .sum::<f64>()
            / 3.0
    }
}

impl Default for RatedRoleScore {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}

/// Every term of a rated role balance evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedRoleBreakdown {
    pub happiness_a: [f64; TEAM_SIZE],
    pub happiness_b: [f64; TEAM_SIZE],
    /// Peer ratings after slot weighting.
    pub ratings_a: [f64; TEAM_SIZE],
    pub ratings_b: [f64; TEAM_SIZE],
    pub weights: [f64; TEAM_SIZE],
    pub team_a_score: f64,
    pub team_b_score: f64,
    pub fairness_bonus: f64,
    pub rating_fairness: f64,
    pub carry_a: [f64; TEAM_SIZE],
    pub carry_b: [f64; TEAM_SIZE],
    /// `10 / total carry`, or 0 when neither team has any carry potential.
    pub carry_factor: f64,
    pub role_mirror: [f64; TEAM_SIZE],
    pub rating_mirror: [f64; TEAM_SIZE],
    /// Signed per-slot bias; positive leans towards team A.
    pub biases: [f64; TEAM_SIZE],
    pub diff_penalty: f64,
}

impl RatedRoleBreakdown {
    /// Sum of the positive terms.
    pub fn bonuses(&self) -> f64 {
        self.team_a_score + self.team_b_score + self.fairness_bonus + self.rating_fairness
    }

    pub fn rating_total_a(&self) -> f64 {
        self.ratings_a.iter().sum()
    }

    pub fn rating_total_b(&self) -> f64 {
        self.ratings_b.iter().sum()
    }
}

impl ScoreBreakdown for RatedRoleBreakdown {
    fn score(&self) -> f64 {
        self.bonuses() - self.diff_penalty
    }
}

impl SlotScoreFunction for RatedRoleScore {
    type Breakdown = RatedRoleBreakdown;

    fn evaluate(&self, team_a: &TeamSlots, team_b: &TeamSlots) -> RatedRoleBreakdown {
        let (ha, hb) = (&team_a.happiness, &team_b.happiness);

        let team_a_score = self.team_score(ha);
        let team_b_score = self.team_score(hb);
        let fairness_bonus = sech2(team_a_score - team_b_score) * FAIRNESS_WEIGHT;

        let mut ratings_a = [0.0; TEAM_SIZE];
        let mut ratings_b = [0.0; TEAM_SIZE];
        for slot in 0..TEAM_SIZE {
            ratings_a[slot] = team_a.ratings[slot] * self.weights[slot];
            ratings_b[slot] = team_b.ratings[slot] * self.weights[slot];
        }
        let rating_gap = ratings_a.iter().sum::<f64>() - ratings_b.iter().sum::<f64>();
        let rating_fairness = sech2(rating_gap / 2.0).sqrt() * RATING_FAIRNESS_WEIGHT;

        let mut carry_a = [0.0; TEAM_SIZE];
        let mut carry_b = [0.0; TEAM_SIZE];
        for slot in 0..TEAM_SIZE {
            let (ea, eb) = ((ha[slot] / 4.0).exp(), (hb[slot] / 4.0).exp());
            carry_a[slot] = (ea - eb).max(0.0);
            carry_b[slot] = (eb - ea).max(0.0);
        }
        // Supports carry half as hard, and what they have goes through adc.
        let (adc, sup) = (Role::Adc.slot(), Role::Support.slot());
        carry_a[sup] /= 2.0;
        carry_b[sup] /= 2.0;
        carry_a[adc] += carry_a[sup];
        carry_b[adc] += carry_b[sup];

        let carry_total: f64 = carry_a.iter().chain(carry_b.iter()).sum();
        let carry_factor = if carry_total > 0.0 {
            CARRY_SCALE / carry_total
        } else {
            0.0
        };

        let mut role_mirror = [0.0; TEAM_SIZE];
        let mut rating_mirror = [0.0; TEAM_SIZE];
        let mut biases = [0.0; TEAM_SIZE];
        for slot in 0..TEAM_SIZE {
            role_mirror[slot] = mirror_term(ha[slot], hb[slot]);
            rating_mirror[slot] =
                RATING_MIRROR_WEIGHT * (ratings_a[slot] - ratings_b[slot]).abs().powf(1.5);
            let bias = role_mirror[slot] * sign(ha[slot] - hb[slot])
                + rating_mirror[slot] * sign(ratings_a[slot] - ratings_b[slot]);
            let carry = if bias >= 0.0 {
                carry_a[slot]
            } else {
                carry_b[slot]
            };
            biases[slot] = bias * carry * carry_factor;
        }

        let mirror_sum: f64 = role_mirror.iter().chain(rating_mirror.iter()).sum();
        let bias_sum: f64 = biases.iter().sum();
        let diff_penalty = mirror_sum * 0.5 + bias_sum.abs() * 0.5;

        RatedRoleBreakdown {
            happiness_a: *ha,
            happiness_b: *hb,
            ratings_a,
            ratings_b,
            weights: self.weights,
            team_a_score,
            team_b_score,
            fairness_bonus,
            rating_fairness,
            carry_a,
            carry_b,
            carry_factor,
            role_mirror,
            rating_mirror,
            biases,
            diff_penalty,
        }
    }
}

fn rounded(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.2}")).collect();
    format!("[{}]", parts.join(", "))
}

impl fmt::Display for RatedRoleBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation metrics:")?;
        writeln!(f, "=======\nBonuses\n=======")?;
        writeln!(
            f,
            "Team 1 skill      {} -> {:.2}",
            rounded(&self.happiness_a),
            self.team_a_score
        )?;
        writeln!(
            f,
            "Team 2 skill      {} -> {:.2}",
            rounded(&self.happiness_b),
            self.team_b_score
        )?;
        writeln!(f, "Rating weights    {}", rounded(&self.weights))?;
        writeln!(
            f,
            "Team 1 ratings    {} -> {:.2}",
            rounded(&self.ratings_a),
            self.rating_total_a()
        )?;
        writeln!(
            f,
            "Team 2 ratings    {} -> {:.2}",
            rounded(&self.ratings_b),
            self.rating_total_b()
        )?;
        writeln!(f, "Fairness bonus      {:.2}  (/3)", self.fairness_bonus)?;
        writeln!(f, "Rating fairness   + {:.2}  (/3)", self.rating_fairness)?;
        writeln!(f, "Calculation       = {:.2}", self.bonuses())?;
        writeln!(f)?;
        writeln!(f, "=========\nPenalties\n=========")?;
        writeln!(f, "Differences")?;

        let diffs: Vec<String> = (0..TEAM_SIZE)
            .map(|slot| format!("{:.2}", self.role_mirror[slot] + self.rating_mirror[slot]))
            .collect();
        let width = diffs.iter().map(String::len).max().unwrap_or(0);
        for (bias, diff) in self.biases.iter().zip(&diffs) {
            // The arrow points at the team the slot favours.
            let left = if *bias >= 0.0 { "< " } else { "  " };
            let right = if *bias <= 0.0 { " >" } else { "  " };
            writeln!(f, "{:18}{left}{diff:<width$}{right}", "")?;
        }
        writeln!(f, "Calculation       {:.2}", self.diff_penalty)?;
        writeln!(f)?;
        writeln!(f, "=====\nScore\n=====")?;
        writeln!(f, "{:.2}", self.score())?;
        write!(f, "Biases            {}", rounded(&self.biases))
    }
}
