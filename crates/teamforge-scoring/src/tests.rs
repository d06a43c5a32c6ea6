//! Tests for the score functions.

use rand::rngs::StdRng;
use rand::SeedableRng;
use teamforge_core::{TeamForgeError, TeamSplit, EPSILON};
use teamforge_test::{rated_lobby, role_lobby, uniform_affinity};

use super::*;

fn slots(happiness: [f64; 5]) -> TeamSlots {
    TeamSlots::from_happiness(happiness)
}

#[test]
fn test_role_balance_mirror_penalty_zero_for_identical_teams() {
    let score = RoleBalanceScore::default();
    let team = slots([7.0, 3.0, 0.0, 9.0, 4.0]);
    let breakdown = score.evaluate(&team, &team);

    assert_eq!(breakdown.diff_penalty, 0.0);
    assert!(breakdown.differences.iter().all(|&d| d == 0.0));
    assert!((breakdown.fairness_bonus - 5.0).abs() < 1e-12);
}

#[test]
fn test_role_balance_known_value() {
    let score = RoleBalanceScore::default();
    let team = slots([1.0; 5]);
    let expected = 2.0 * 5.0 * (1.0 + EPSILON).ln() + 5.0;

    assert!((score.score(&team, &team) - expected).abs() < 1e-12);
}

#[test]
fn test_role_balance_penalises_lopsided_lane_with_equal_totals() {
    let score = RoleBalanceScore::default();
    let a = slots([9.0, 1.0, 5.0, 5.0, 5.0]);
    let b = slots([1.0, 9.0, 5.0, 5.0, 5.0]);
    let breakdown = score.evaluate(&a, &b);

    assert!((breakdown.team_a_score - breakdown.team_b_score).abs() < 1e-12);
    assert!(breakdown.diff_penalty > 0.0);
    assert!(breakdown.score() < score.score(&a, &a));
}

#[test]
fn test_role_balance_zero_confidence_is_finite() {
    let score = RoleBalanceScore::default();
    let value = score.score(&slots([0.0; 5]), &slots([9.0; 5]));
    assert!(value.is_finite());
}

#[test]
fn test_role_balance_report_mentions_every_section() {
    let score = RoleBalanceScore::default();
    let report = score
        .evaluate(&slots([1.0, 2.0, 3.0, 4.0, 5.0]), &slots([5.0, 4.0, 3.0, 2.0, 1.0]))
        .to_string();

    for section in ["Bonuses", "Penalties", "Score", "Fairness bonus"] {
        assert!(report.contains(section), "missing {section}");
    }
}

#[test]
fn test_rated_zero_carry_defines_factor_as_zero() {
    let score = RatedRoleScore::default();
    let team = slots([4.0; 5]).with_ratings([9.0; 5]);
    let breakdown = score.evaluate(&team, &team);

    assert_eq!(breakdown.carry_factor, 0.0);
    assert!(breakdown.biases.iter().all(|&b| b == 0.0));
    assert_eq!(breakdown.diff_penalty, 0.0);
    assert!(breakdown.score().is_finite());
    assert!((breakdown.rating_fairness - 3.0).abs() < 1e-12);
    assert!((breakdown.fairness_bonus - 3.0).abs() < 1e-12);
}

#[test]
fn test_rated_support_carry_flows_into_adc() {
    let score = RatedRoleScore::default();
    let a = slots([5.0, 5.0, 5.0, 5.0, 9.0]);
    let b = slots([5.0, 5.0, 5.0, 5.0, 1.0]);
    let breakdown = score.evaluate(&a, &b);

    let support_carry = ((9.0f64 / 4.0).exp() - (1.0f64 / 4.0).exp()) / 2.0;
    assert!((breakdown.carry_a[4] - support_carry).abs() < 1e-12);
    assert!((breakdown.carry_a[3] - support_carry).abs() < 1e-12);
    assert!(breakdown.carry_b.iter().all(|&c| c == 0.0));
    assert!((breakdown.carry_factor - 10.0 / (2.0 * support_carry)).abs() < 1e-9);
    assert!(breakdown.biases[4] > 0.0);
}

#[test]
fn test_rated_rating_gap_lowers_rating_fairness() {
    let score = RatedRoleScore::default();
    let even = slots([5.0; 5]).with_ratings([9.0; 5]);
    let strong = slots([5.0; 5]).with_ratings([18.0; 5]);

    let balanced = score.evaluate(&even, &even);
    let unbalanced = score.evaluate(&strong, &even);
    assert!(unbalanced.rating_fairness < balanced.rating_fairness);
    assert!(unbalanced.score() < balanced.score());
}

#[test]
fn test_rated_report_has_one_arrow_line_per_slot() {
    let score = RatedRoleScore::default();
    let a = slots([9.0, 2.0, 5.0, 6.0, 1.0]).with_ratings([18.0, 9.0, 9.0, 0.0, 9.0]);
    let b = slots([3.0, 8.0, 5.0, 4.0, 7.0]).with_ratings([9.0, 18.0, 0.0, 9.0, 9.0]);
    let report = score.evaluate(&a, &b).to_string();

    let arrow_lines = report
        .lines()
        .filter(|l| l.trim_start().starts_with('<') || l.trim_end().ends_with('>'))
        .count();
    assert_eq!(arrow_lines, 5);
}

#[test]
fn test_slot_table_peer_ratings() {
    let table = SlotTable::with_peer_ratings(&rated_lobby()).unwrap();

    assert_eq!(table.peer_rating(0), 18.0);
    assert_eq!(table.peer_rating(3), 9.0);
    assert_eq!(table.peer_rating(8), 0.0);
    assert_eq!(table.confidence(2, 2), 9.0);
}

#[test]
fn test_slot_table_rejects_narrow_matrix() {
    let err = SlotTable::with_peer_ratings(&role_lobby()).unwrap_err();
    assert!(matches!(err, TeamForgeError::VectorLength { expected: 14, .. }));
}

#[test]
fn test_slot_table_rejects_wide_matrix() {
    let err = SlotTable::from_role_confidence(&rated_lobby()).unwrap_err();
    assert_eq!(
        err,
        TeamForgeError::VectorLength {
            player: 0,
            expected: 5,
            found: 14
        }
    );
}

#[test]
fn test_team_slots_follow_slot_order() {
    let table = SlotTable::from_role_confidence(&role_lobby()).unwrap();
    let split = TeamSplit::from_arrangement([7, 1, 2, 3, 6, 0, 5, 4, 8, 9]);
    let team_a = table.team_slots(&split.team_a);

    assert_eq!(team_a.happiness, [9.0, 7.0, 9.0, 7.0, 9.0]);
    assert_eq!(team_a.ratings, [0.0; 5]);
}

#[test]
fn test_uniform_affinity_happiness_is_twenty_five_v() {
    let matrix = uniform_affinity(0.25);
    for team in [[0, 1, 2, 3, 4], [9, 3, 6, 1, 0]] {
        assert_eq!(team_happiness(&matrix, &team), 25.0 * 0.25);
    }
}

#[test]
fn test_affinity_strategies() {
    assert!((AffinityStrategy::Fair.combine(1.0, 1.0, EPSILON)).abs() < 1e-12);
    assert_eq!(AffinityStrategy::Utilitarian.combine(1.5, 2.0, EPSILON), 3.5);
    assert_eq!(
        AffinityStrategy::Fair.combine(0.0, 1.0, EPSILON),
        EPSILON.ln()
    );
    // Fair prefers an even split of the same total.
    assert!(
        AffinityStrategy::Fair.combine(2.0, 2.0, EPSILON)
            > AffinityStrategy::Fair.combine(3.0, 1.0, EPSILON)
    );
}

#[test]
fn test_affinity_strategy_parsing() {
    assert_eq!("fair".parse(), Ok(AffinityStrategy::Fair));
    assert_eq!("utilitarian".parse(), Ok(AffinityStrategy::Utilitarian));
    assert_eq!(
        "greedy".parse::<AffinityStrategy>(),
        Err(TeamForgeError::UnknownStrategy("greedy".to_string()))
    );
}

#[test]
fn test_jitter_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(Jitter::disabled().apply(1.25, &mut rng), 1.25);

    let jitter = Jitter::from_flag(true);
    for _ in 0..100 {
        let value = jitter.apply(1.25, &mut rng);
        assert!((1.25..1.25 + Jitter::DEFAULT_AMPLITUDE).contains(&value));
    }
}
