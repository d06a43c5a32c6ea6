//! Entry point tying configuration, matchers and randomness together.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use teamforge_config::EngineConfig;
use teamforge_core::{PreferenceMatrix, Result};
use tracing::info;

use crate::matcher::Matcher;
use crate::registry::MatcherKind;
use crate::suggestion::Suggestion;

/// One independent suggestion to compute in a batch.
#[derive(Debug, Clone)]
pub struct SuggestRequest {
    pub kind: MatcherKind,
    pub matrix: PreferenceMatrix,
}

impl SuggestRequest {
    pub fn new(kind: MatcherKind, matrix: PreferenceMatrix) -> Self {
        Self { kind, matrix }
    }
}

/// Suggests team splits with configured matchers.
///
/// The engine holds no mutable state. Every call receives or creates its
/// own random source, so concurrent calls never share one.
#[derive(Debug, Clone, Default)]
pub struct TeamFormationEngine {
    config: EngineConfig,
}

impl TeamFormationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The matcher `kind` resolves to under this engine's configuration.
    pub fn matcher(&self, kind: MatcherKind) -> Matcher {
        kind.build(&self.config)
    }

    /// Suggests a split using `rng` for every random decision.
    ///
    /// # Errors
    ///
    /// Returns [`teamforge_core::TeamForgeError::VectorLength`] when the
    /// matrix width does not match `kind`.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        kind: MatcherKind,
        matrix: &PreferenceMatrix,
        rng: &mut R,
    ) -> Result<Suggestion> {
        let suggestion = self.matcher(kind).generate_teams(matrix, rng)?;
        info!(
            event = "suggestion",
            matcher = kind.key(),
            score = suggestion.score,
            score_calculations = suggestion.statistics.score_calculations,
            team_a = ?suggestion.split.team_a,
            team_b = ?suggestion.split.team_b,
        );
        Ok(suggestion)
    }

    /// Suggests a split seeded from the configured `random_seed`, or from
    /// OS entropy when none is set.
    pub fn suggest_seeded(&self, kind: MatcherKind, matrix: &PreferenceMatrix) -> Result<Suggestion> {
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.suggest(kind, matrix, &mut rng)
    }

    /// Runs independent suggestions in parallel.
    ///
    /// Request `i` draws from its own ChaCha stream `i` of `seed`, so the
    /// results depend only on the inputs, never on thread scheduling.
    /// Results come back in request order.
    pub fn suggest_batch(&self, requests: &[SuggestRequest], seed: u64) -> Vec<Result<Suggestion>> {
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(i as u64);
                self.suggest(request.kind, &request.matrix, &mut rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
