//! Friend-based matching over every possible split.

use rand::Rng;
use teamforge_config::{AffinityStrategyType, EngineConfig};
use teamforge_core::{
    PlayerIndex, PreferenceMatrix, PreferenceVector, Result, TeamForgeError, EPSILON, ROSTER_SIZE,
};
use teamforge_scoring::{team_happiness, AffinityStrategy, Jitter};
use teamforge_solver::{ExhaustiveSearch, SearchOutcome};

use crate::codec::{self, RawResponse};
use crate::explanation::Explanation;
use crate::query::{FieldDescriptor, Query, QueryContext};

/// Groups players who want to play together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffinityMatcher {
    strategy: AffinityStrategy,
    epsilon: f64,
    jitter: Jitter,
}

impl AffinityMatcher {
    pub fn new(strategy: AffinityStrategy) -> Self {
        Self {
            strategy,
            epsilon: EPSILON,
            jitter: Jitter::disabled(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let strategy = match config.affinity.strategy {
            AffinityStrategyType::Fair => AffinityStrategy::Fair,
            AffinityStrategyType::Utilitarian => AffinityStrategy::Utilitarian,
        };
        Self::new(strategy)
            .with_epsilon(config.epsilon)
            .with_jitter(Jitter::from_flag(config.affinity.jitter))
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn strategy(&self) -> AffinityStrategy {
        self.strategy
    }

    pub fn jitter(&self) -> Jitter {
        self.jitter
    }

    pub fn describe_query(&self, context: &QueryContext<'_>) -> Query {
        let fields = context
            .other_players()
            .into_iter()
            .enumerate()
            .map(|(i, name)| FieldDescriptor::number(codec::affinity_key(i), name))
            .collect();
        Query {
            prompt: "How much do you want to play with each of the other players?".to_string(),
            hint: "Any non-negative number. Only the proportions matter.".to_string(),
            fields,
            template: None,
            extra: None,
        }
    }

    pub fn decode_response(&self, respondent: PlayerIndex, raw: &RawResponse) -> PreferenceVector {
        codec::decode_affinity(respondent, raw)
    }

    /// Scores all 252 splits and keeps the first best one.
    ///
    /// The explanation holds both teams' raw happiness, without jitter.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::VectorLength`] unless the matrix is ten
    /// wide.
    pub fn generate_teams<R: Rng + ?Sized>(
        &self,
        matrix: &PreferenceMatrix,
        rng: &mut R,
    ) -> Result<(SearchOutcome, Explanation)> {
        if matrix.width() != ROSTER_SIZE {
            return Err(TeamForgeError::VectorLength {
                player: 0,
                expected: ROSTER_SIZE,
                found: matrix.width(),
            });
        }

        let outcome = ExhaustiveSearch::new().solve(|split| {
            let score = self.strategy.combine(
                team_happiness(matrix, &split.team_a),
                team_happiness(matrix, &split.team_b),
                self.epsilon,
            );
            self.jitter.apply(score, rng)
        });

        let explanation = Explanation::Happiness(
            team_happiness(matrix, &outcome.split.team_a),
            team_happiness(matrix, &outcome.split.team_b),
        );
        Ok((outcome, explanation))
    }
}

impl Default for AffinityMatcher {
    fn default() -> Self {
        Self::new(AffinityStrategy::Fair)
    }
}
