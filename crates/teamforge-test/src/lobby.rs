//! Sample lobbies.

use teamforge_core::{PreferenceMatrix, ROSTER_SIZE};

/// Role confidences (top, jungle, mid, adc, support) of a real
/// ten-player custom game lobby.
pub const ROLE_LOBBY: [[f64; 5]; ROSTER_SIZE] = [
    [9.0, 7.0, 6.0, 0.0, 3.0],
    [9.0, 7.0, 6.0, 6.0, 7.0],
    [6.0, 4.0, 9.0, 8.0, 7.0],
    [4.0, 4.0, 4.0, 7.0, 4.0],
    [5.0, 1.0, 0.0, 0.0, 2.0],
    [4.0, 4.0, 2.0, 6.0, 3.0],
    [3.0, 3.0, 4.0, 4.0, 9.0],
    [9.0, 7.0, 8.0, 8.0, 6.0],
    [2.0, 4.0, 2.0, 1.0, 1.0],
    [2.0, 1.0, 2.0, 0.0, 1.0],
];

/// Ten distinct player names.
pub fn player_names() -> [&'static str; ROSTER_SIZE] {
    [
        "mason", "luke", "lukey", "corey", "david", "alastair", "dennis", "andy", "seong", "derick",
    ]
}

/// [`ROLE_LOBBY`] as a five-wide matrix.
pub fn role_lobby() -> PreferenceMatrix {
    PreferenceMatrix::from_rows(ROLE_LOBBY.iter().map(|r| r.to_vec()).collect(), 5)
        .expect("fixture is well formed")
}

/// [`ROLE_LOBBY`] plus peer assessments, fourteen wide.
///
/// Players 0, 1, 2 and 7 are rated "better" (2) by everyone, players 8
/// and 9 "worse" (0), everyone else "unsure" (1).
pub fn rated_lobby() -> PreferenceMatrix {
    let assessment = |target: usize| match target {
        0 | 1 | 2 | 7 => 2.0,
        8 | 9 => 0.0,
        _ => 1.0,
    };
    let rows = (0..ROSTER_SIZE)
        .map(|rater| {
            let mut row = ROLE_LOBBY[rater].to_vec();
            row.extend(
                (0..ROSTER_SIZE)
                    .filter(|&t| t != rater)
                    .map(assessment),
            );
            row
        })
        .collect();
    PreferenceMatrix::from_rows(rows, 14).expect("fixture is well formed")
}

/// Every player likes every player (themselves included) exactly `value`.
pub fn uniform_affinity(value: f64) -> PreferenceMatrix {
    PreferenceMatrix::from_rows(vec![vec![value; ROSTER_SIZE]; ROSTER_SIZE], ROSTER_SIZE)
        .expect("fixture is well formed")
}

/// Two friend groups, `0..5` and `5..10`.
///
/// Players put most of their weight on their own group, with a few
/// cross-group ties so the optimum is unique but not trivial.
pub fn clustered_affinity() -> PreferenceMatrix {
    let mut rows = vec![vec![0.0; ROSTER_SIZE]; ROSTER_SIZE];
    for (p, row) in rows.iter_mut().enumerate() {
        for (t, value) in row.iter_mut().enumerate() {
            if p == t {
                continue;
            }
            *value = if (p < 5) == (t < 5) { 0.2 } else { 0.01 };
        }
    }
    rows[0][7] = 0.3;
    rows[7][0] = 0.05;
    rows[4][9] = 0.15;
    PreferenceMatrix::from_rows(rows, ROSTER_SIZE).expect("fixture is well formed")
}
