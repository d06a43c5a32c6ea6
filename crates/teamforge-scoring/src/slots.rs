//! Per-slot views of a preference matrix.
//!
//! Role-based matchers score a split slot by slot: the occupant of team A's
//! slot `i` is compared with the occupant of team B's slot `i`. A
//! [`SlotTable`] holds what each player would contribute in each slot so
//! the search never touches the raw matrix.

use teamforge_core::{
    PlayerIndex, PreferenceMatrix, Result, TeamForgeError, ROSTER_SIZE, TEAM_SIZE,
};

/// Number of peer assessments each rated response carries.
pub const PEER_RATING_COUNT: usize = ROSTER_SIZE - 1;

/// One team's values, indexed by role slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TeamSlots {
    /// Role confidence of the slot's occupant for that slot.
    pub happiness: [f64; TEAM_SIZE],
    /// Aggregate peer rating of the slot's occupant.
    pub ratings: [f64; TEAM_SIZE],
}

impl TeamSlots {
    /// Slots with the given happiness and zero ratings.
    pub fn from_happiness(happiness: [f64; TEAM_SIZE]) -> Self {
        Self {
            happiness,
            ratings: [0.0; TEAM_SIZE],
        }
    }

    pub fn with_ratings(mut self, ratings: [f64; TEAM_SIZE]) -> Self {
        self.ratings = ratings;
        self
    }
}

/// Role confidences and peer ratings for all ten players.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTable {
    roles: [[f64; TEAM_SIZE]; ROSTER_SIZE],
    ratings: [f64; ROSTER_SIZE],
}

impl SlotTable {
    /// Reads a five-wide matrix as role confidences. Ratings are zero.
    pub fn from_role_confidence(matrix: &PreferenceMatrix) -> Result<Self> {
        require_width(matrix, TEAM_SIZE)?;
        Ok(Self::read_roles(matrix))
    }

    fn read_roles(matrix: &PreferenceMatrix) -> Self {
        let mut roles = [[0.0; TEAM_SIZE]; ROSTER_SIZE];
        for (player, row) in roles.iter_mut().enumerate() {
            for (slot, value) in row.iter_mut().enumerate() {
                *value = matrix.value(player, slot);
            }
        }
        Self {
            roles,
            ratings: [0.0; ROSTER_SIZE],
        }
    }

    /// Reads role confidences plus the nine peer assessments that follow.
    ///
    /// Each response rates the other nine players in roster order with
    /// the respondent skipped. A player's peer rating is the sum of what
    /// the other nine said about them.
    pub fn with_peer_ratings(matrix: &PreferenceMatrix) -> Result<Self> {
        require_width(matrix, TEAM_SIZE + PEER_RATING_COUNT)?;
        let mut table = Self::read_roles(matrix);
        for rater in 0..ROSTER_SIZE {
            for target in (0..ROSTER_SIZE).filter(|&t| t != rater) {
                let column = if target < rater { target } else { target - 1 };
                table.ratings[target] += matrix.value(rater, TEAM_SIZE + column);
            }
        }
        Ok(table)
    }

    /// `player`'s confidence in role slot `slot`.
    #[inline]
    pub fn confidence(&self, player: PlayerIndex, slot: usize) -> f64 {
        self.roles[player][slot]
    }

    /// `player`'s aggregate peer rating.
    #[inline]
    pub fn peer_rating(&self, player: PlayerIndex) -> f64 {
        self.ratings[player]
    }

    /// Resolves a team's slot values: slot `i` holds `team[i]`'s
    /// confidence for role `i` and `team[i]`'s peer rating.
    pub fn team_slots(&self, team: &[PlayerIndex; TEAM_SIZE]) -> TeamSlots {
        let mut slots = TeamSlots::default();
        for (slot, &player) in team.iter().enumerate() {
            slots.happiness[slot] = self.roles[player][slot];
            slots.ratings[slot] = self.ratings[player];
        }
        slots
    }
}

/// Every row has the matrix width, so the first row stands for all.
fn require_width(matrix: &PreferenceMatrix, expected: usize) -> Result<()> {
    if matrix.width() != expected {
        return Err(TeamForgeError::VectorLength {
            player: 0,
            expected,
            found: matrix.width(),
        });
    }
    Ok(())
}
