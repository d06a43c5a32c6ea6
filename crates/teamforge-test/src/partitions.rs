//! Brute-force enumeration of team splits.

use teamforge_core::{TeamSplit, ROSTER_SIZE, TEAM_SIZE};

/// Every 5-member subset of `0..10` in lexicographic order (252 of them).
pub fn all_team_a_choices() -> Vec<[usize; TEAM_SIZE]> {
    let mut out = Vec::with_capacity(252);
    for a in 0..ROSTER_SIZE {
        for b in a + 1..ROSTER_SIZE {
            for c in b + 1..ROSTER_SIZE {
                for d in c + 1..ROSTER_SIZE {
                    for e in d + 1..ROSTER_SIZE {
                        out.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    out
}

/// Every split with team B as the ascending complement of team A.
pub fn all_splits() -> Vec<TeamSplit> {
    all_team_a_choices()
        .into_iter()
        .map(TeamSplit::with_complement)
        .collect()
}
