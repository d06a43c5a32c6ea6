//! Tests for the engine entry points.

use rand::rngs::StdRng;
use rand::SeedableRng;
use teamforge_config::EngineConfig;
use teamforge_core::{Roster, TeamForgeError};
use teamforge_test::{clustered_affinity, player_names, rated_lobby, role_lobby};

use super::*;
use crate::explanation::Explanation;

fn requests() -> Vec<SuggestRequest> {
    vec![
        SuggestRequest::new(MatcherKind::Affinity, clustered_affinity()),
        SuggestRequest::new(MatcherKind::RoleBalance, role_lobby()),
        SuggestRequest::new(MatcherKind::RoleBalanceWithRating, rated_lobby()),
        SuggestRequest::new(MatcherKind::RoleBalance, rated_lobby()),
    ]
}

#[test]
fn test_suggest_uses_configured_matcher() {
    let config = EngineConfig::default().with_jitter(false);
    let engine = TeamFormationEngine::new(config);
    let mut rng = StdRng::seed_from_u64(0);

    let suggestion = engine
        .suggest(MatcherKind::Affinity, &clustered_affinity(), &mut rng)
        .unwrap();
    assert_eq!(suggestion.kind, MatcherKind::Affinity);
    assert_eq!(suggestion.statistics.score_calculations, 252);
    assert!(matches!(suggestion.explanation, Explanation::Happiness(..)));
}

#[test]
fn test_suggest_seeded_is_reproducible() {
    let engine = TeamFormationEngine::new(EngineConfig::default().with_random_seed(9));
    let first = engine
        .suggest_seeded(MatcherKind::RoleBalance, &role_lobby())
        .unwrap();
    let second = engine
        .suggest_seeded(MatcherKind::RoleBalance, &role_lobby())
        .unwrap();

    assert_eq!(first.split, second.split);
    assert_eq!(first.score, second.score);
}

#[test]
fn test_suggest_seeded_without_seed_still_partitions() {
    let engine = TeamFormationEngine::default();
    let suggestion = engine
        .suggest_seeded(MatcherKind::RoleBalanceWithRating, &rated_lobby())
        .unwrap();
    assert!(suggestion.split.is_valid());
}

#[test]
fn test_batch_is_deterministic_and_ordered() {
    let engine = TeamFormationEngine::new(EngineConfig::default().with_jitter(true));
    let first = engine.suggest_batch(&requests(), 77);
    let second = engine.suggest_batch(&requests(), 77);

    assert_eq!(first.len(), 4);
    for (a, b) in first.iter().zip(&second) {
        match (a, b) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.split, b.split);
                assert_eq!(a.score, b.score);
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("batch results differ between runs"),
        }
    }

    let kinds: Vec<MatcherKind> = first[..3].iter().map(|r| r.as_ref().unwrap().kind).collect();
    assert_eq!(kinds, MatcherKind::ALL);
}

#[test]
fn test_batch_matches_sequential_streams() {
    let engine = TeamFormationEngine::default();
    let batch = engine.suggest_batch(&requests(), 5);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    rng.set_stream(1);
    let sequential = engine
        .suggest(MatcherKind::RoleBalance, &role_lobby(), &mut rng)
        .unwrap();
    let from_batch = batch[1].as_ref().unwrap();
    assert_eq!(from_batch.split, sequential.split);
}

#[test]
fn test_batch_reports_errors_per_request() {
    let engine = TeamFormationEngine::default();
    let results = engine.suggest_batch(&requests(), 1);

    assert!(results[..3].iter().all(|r| r.is_ok()));
    assert!(matches!(
        results[3],
        Err(TeamForgeError::VectorLength {
            expected: 5,
            found: 14,
            ..
        })
    ));
}

#[test]
fn test_named_suggestion_serializes() {
    let roster = Roster::new(player_names()).unwrap();
    let engine = TeamFormationEngine::new(EngineConfig::default().with_jitter(false));
    let mut rng = StdRng::seed_from_u64(1);
    let suggestion = engine
        .suggest(MatcherKind::Affinity, &clustered_affinity(), &mut rng)
        .unwrap();

    let named = suggestion.named(&roster);
    assert_eq!(named.team1.len(), 5);
    assert_eq!(named.team1[0], roster.name(suggestion.split.team_a[0]));

    let json = serde_json::to_value(&named).unwrap();
    assert_eq!(json["team2"].as_array().map(Vec::len), Some(5));
    // Happiness explanations serialize as a two-element array.
    assert_eq!(json["facts"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_named_report_serializes_as_string() {
    let roster = Roster::new(player_names()).unwrap();
    let engine = TeamFormationEngine::default();
    let mut rng = StdRng::seed_from_u64(4);
    let suggestion = engine
        .suggest(MatcherKind::RoleBalance, &role_lobby(), &mut rng)
        .unwrap();

    let json = serde_json::to_value(suggestion.named(&roster)).unwrap();
    assert!(json["facts"]
        .as_str()
        .is_some_and(|s| s.starts_with("Evaluation metrics:")));
}
