//! Cross-engine tests.

use teamforge_core::EPSILON;
use teamforge_scoring::{team_happiness, AffinityStrategy};
use teamforge_test::{all_splits, clustered_affinity, uniform_affinity};

use super::*;

#[test]
fn test_exhaustive_matches_brute_force() {
    let matrix = clustered_affinity();
    for strategy in [AffinityStrategy::Fair, AffinityStrategy::Utilitarian] {
        let score = |split: &TeamSplit| {
            strategy.combine(
                team_happiness(&matrix, &split.team_a),
                team_happiness(&matrix, &split.team_b),
                EPSILON,
            )
        };

        let outcome = ExhaustiveSearch::new().solve(score);
        let brute_max = all_splits()
            .iter()
            .map(score)
            .fold(f64::NEG_INFINITY, f64::max);

        assert_eq!(outcome.score, brute_max, "{strategy}");
        assert!(outcome.split.is_valid());
        assert_eq!(outcome.statistics.score_calculations, 252);
    }
}

#[test]
fn test_exhaustive_tie_keeps_first_split() {
    let matrix = uniform_affinity(0.5);
    for strategy in [AffinityStrategy::Fair, AffinityStrategy::Utilitarian] {
        let outcome = ExhaustiveSearch::new().solve(|split| {
            strategy.combine(
                team_happiness(&matrix, &split.team_a),
                team_happiness(&matrix, &split.team_b),
                EPSILON,
            )
        });

        assert_eq!(outcome.split.team_a, [0, 1, 2, 3, 4], "{strategy}");
        assert_eq!(outcome.split.team_b, [5, 6, 7, 8, 9], "{strategy}");
        assert_eq!(outcome.score, outcome.initial_score, "{strategy}");
        assert_eq!(outcome.score, strategy.combine(12.5, 12.5, EPSILON));
    }
}
