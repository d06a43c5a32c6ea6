//! Scrim Demo
//!
//! Balances a ten-player custom game lobby with each TeamForge matcher.
//! Answers are written as the raw form values a respondent would submit,
//! then decoded and searched exactly as a server would.
//!
//! Usage: `scrim [config.toml]`

use std::error::Error;

use rand::rngs::StdRng;
use rand::SeedableRng;
use teamforge::codec::{affinity_key, rating_key};
use teamforge::prelude::*;
use teamforge::Role;

const PLAYERS: [&str; 10] = [
    "mason", "luke", "lukey", "corey", "david", "alastair", "dennis", "andy", "seong", "derick",
];

/// Role confidences in role order.
const ROLES: [[u8; 5]; 10] = [
    [9, 7, 6, 0, 3],
    [9, 7, 6, 6, 7],
    [6, 4, 9, 8, 7],
    [4, 4, 4, 7, 4],
    [5, 1, 0, 0, 2],
    [4, 4, 2, 6, 3],
    [3, 3, 4, 4, 9],
    [9, 7, 8, 8, 6],
    [2, 4, 2, 1, 1],
    [2, 1, 2, 0, 1],
];

/// Two friend groups: the first five and the last five.
fn friend_answers(respondent: usize) -> RawResponse {
    (0..10)
        .filter(|&other| other != respondent)
        .enumerate()
        .map(|(i, other)| {
            let weight = if (other < 5) == (respondent < 5) { 5 } else { 1 };
            (affinity_key(i), weight.to_string())
        })
        .collect()
}

fn role_answers(respondent: usize) -> RawResponse {
    Role::ALL
        .iter()
        .map(|role| (role.key(), ROLES[respondent][role.slot()].to_string()))
        .collect()
}

/// Everyone rates the strongest two players "better" and the weakest two
/// "worse".
fn rated_answers(respondent: usize) -> RawResponse {
    let mut raw = role_answers(respondent);
    for (i, other) in (0..10).filter(|&o| o != respondent).enumerate() {
        let choice = match other {
            1 | 7 => "better",
            8 | 9 => "worse",
            _ => "unsure",
        };
        raw = raw.with(rating_key(i), choice);
    }
    raw
}

fn collect(matcher: &Matcher, answers: fn(usize) -> RawResponse) -> teamforge::Result<PreferenceMatrix> {
    let rows = (0..10)
        .map(|respondent| matcher.decode_response(respondent, &answers(respondent)))
        .collect();
    PreferenceMatrix::new(rows, matcher.vector_len())
}

fn main() -> Result<(), Box<dyn Error>> {
    teamforge::console::init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let seed = config.random_seed.unwrap_or(2024);
    let engine = TeamFormationEngine::new(config);
    let roster = Roster::new(PLAYERS)?;

    let lobbies: [(MatcherKind, fn(usize) -> RawResponse); 3] = [
        (MatcherKind::Affinity, friend_answers),
        (MatcherKind::RoleBalance, role_answers),
        (MatcherKind::RoleBalanceWithRating, rated_answers),
    ];

    for (kind, answers) in lobbies {
        let matcher = engine.matcher(kind);
        let query = matcher.describe_query(&QueryContext::new(&roster, 0)?);
        println!("\n== {kind} ==");
        println!("Asked: {}", query.prompt);
        println!("Fields: {}", query.fields.len());

        let matrix = collect(&matcher, answers)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let suggestion = engine.suggest(kind, &matrix, &mut rng)?;
        let named = suggestion.named(&roster);

        println!("Team 1: {}", named.team1.join(", "));
        println!("Team 2: {}", named.team2.join(", "));
        println!("{}", named.facts);
    }

    Ok(())
}
