//! Tests for the local search engine.

use std::cell::Cell;

use rand::rngs::StdRng;
use rand::SeedableRng;
use teamforge_scoring::{RoleBalanceScore, SlotScoreFunction, SlotTable};
use teamforge_test::role_lobby;

use super::*;
use crate::moves::NEIGHBORHOOD_SIZE;

fn role_score(table: &SlotTable) -> impl Fn(&TeamSplit) -> f64 + '_ {
    let scorer = RoleBalanceScore::default();
    move |split: &TeamSplit| {
        scorer.score(
            &table.team_slots(&split.team_a),
            &table.team_slots(&split.team_b),
        )
    }
}

/// Number of slots already holding their own index.
fn fixed_points(split: &TeamSplit) -> f64 {
    split
        .arrangement()
        .iter()
        .enumerate()
        .filter(|(slot, &player)| *slot == player)
        .count() as f64
}

#[test]
fn test_random_split_is_partition() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        assert!(LocalSearch::random_split(&mut rng).is_valid());
    }
}

#[test]
fn test_solve_returns_partition_for_many_seeds() {
    let table = SlotTable::from_role_confidence(&role_lobby()).unwrap();
    let score = role_score(&table);
    let search = LocalSearch::new(50);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = search.solve(&mut rng, |split, _| score(split));
        assert!(outcome.split.is_valid(), "seed {seed}: {}", outcome.split);
        assert!(outcome.score >= outcome.initial_score);
    }
}

#[test]
fn test_candidates_never_worse_than_parent() {
    let table = SlotTable::from_role_confidence(&role_lobby()).unwrap();
    let score = role_score(&table);
    let search = LocalSearch::new(50);
    let mut rng = StdRng::seed_from_u64(11);

    let root = LocalSearch::random_split(&mut rng);
    let root_score = score(&root);
    let mut statistics = SearchStatistics::default();
    let candidates = search.explore(root, root_score, &score, &mut statistics);

    assert!(!candidates.is_empty());
    for candidate in &candidates {
        if let Some(parent) = candidate.parent_score {
            assert!(candidate.score >= parent);
        }
        assert!(candidate.score >= root_score);
    }
    let last = candidates.last().unwrap();
    assert_eq!(last.split, root);
    assert_eq!(last.depth, 0);
    assert_eq!(last.parent_score, None);
}

#[test]
fn test_score_calculations_within_budget() {
    let table = SlotTable::from_role_confidence(&role_lobby()).unwrap();
    let score = role_score(&table);

    for budget in [1u64, 10, 50] {
        let calls = Cell::new(0u64);
        let search = LocalSearch::new(budget);
        let mut rng = StdRng::seed_from_u64(budget);
        let outcome = search.solve(&mut rng, |split, _| {
            calls.set(calls.get() + 1);
            score(split)
        });

        let bound = budget * NEIGHBORHOOD_SIZE as u64 + 1;
        assert!(calls.get() <= bound, "budget {budget}: {} calls", calls.get());
        assert_eq!(outcome.statistics.score_calculations, calls.get());
        assert!(outcome.statistics.expansions <= budget);
    }
}

#[test]
fn test_zero_budget_keeps_initial_split() {
    let search = LocalSearch::new(0);
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = search.solve(&mut rng, |split, _| fixed_points(split));

    assert_eq!(outcome.score, outcome.initial_score);
    assert_eq!(outcome.statistics.score_calculations, 1);
    assert_eq!(outcome.statistics.candidates, 0);
    assert!(outcome.statistics.budget_exhausted);
}

#[test]
fn test_flat_landscape_keeps_starting_split() {
    let search = LocalSearch::new(50);
    let mut rng = StdRng::seed_from_u64(17);
    let outcome = search.solve(&mut rng, |_, _| 1.0);

    let mut replay = StdRng::seed_from_u64(17);
    let start = LocalSearch::random_split(&mut replay);
    assert_eq!(outcome.split, start);
    assert_eq!(outcome.score, 1.0);
    // Every neighbour ties, so the whole budget is spent.
    assert_eq!(outcome.statistics.expansions, 50);
    assert_eq!(
        outcome.statistics.score_calculations,
        50 * NEIGHBORHOOD_SIZE as u64 + 1
    );
    assert!(outcome.statistics.budget_exhausted);
}

#[test]
fn test_climbs_to_unique_optimum() {
    let search = LocalSearch::new(50);
    let mut rng = StdRng::seed_from_u64(5);
    let outcome = search.solve(&mut rng, |split, _| fixed_points(split));

    assert_eq!(outcome.score, 10.0);
    assert_eq!(outcome.split.arrangement(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_same_seed_same_result() {
    let table = SlotTable::from_role_confidence(&role_lobby()).unwrap();
    let score = role_score(&table);
    let search = LocalSearch::new(50);

    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        search.solve(&mut rng, |split, _| score(split))
    };
    let (first, second) = (run(42), run(42));
    assert_eq!(first.split, second.split);
    assert_eq!(first.score, second.score);
}
