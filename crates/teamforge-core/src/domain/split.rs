//! Two-team partitions of the roster.

use std::fmt;

use super::{PlayerIndex, Role, ROSTER_SIZE, TEAM_SIZE};
use crate::error::{Result, TeamForgeError};

/// Two disjoint teams of five covering all ten players.
///
/// For role-based matchers, position `i` in a team is role slot `i`
/// (see [`Role::ALL`]). For the affinity matcher the order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSplit {
    pub team_a: [PlayerIndex; TEAM_SIZE],
    pub team_b: [PlayerIndex; TEAM_SIZE],
}

impl TeamSplit {
    /// Creates a split, checking that it partitions the roster.
    pub fn new(team_a: [PlayerIndex; TEAM_SIZE], team_b: [PlayerIndex; TEAM_SIZE]) -> Result<Self> {
        let split = Self { team_a, team_b };
        split.validate()?;
        Ok(split)
    }

    /// Splits a ten-slot arrangement into its first and last five slots.
    pub fn from_arrangement(arrangement: [PlayerIndex; ROSTER_SIZE]) -> Self {
        let mut team_a = [0; TEAM_SIZE];
        let mut team_b = [0; TEAM_SIZE];
        team_a.copy_from_slice(&arrangement[..TEAM_SIZE]);
        team_b.copy_from_slice(&arrangement[TEAM_SIZE..]);
        Self { team_a, team_b }
    }

    /// Builds the split where `team_a` is the given members and team B is
    /// the remaining players in ascending order.
    pub fn with_complement(team_a: [PlayerIndex; TEAM_SIZE]) -> Self {
        let mut team_b = [0; TEAM_SIZE];
        let mut next = 0;
        for player in 0..ROSTER_SIZE {
            if !team_a.contains(&player) {
                team_b[next] = player;
                next += 1;
            }
        }
        Self { team_a, team_b }
    }

    /// Concatenates both teams into one ten-slot arrangement.
    pub fn arrangement(&self) -> [PlayerIndex; ROSTER_SIZE] {
        let mut slots = [0; ROSTER_SIZE];
        slots[..TEAM_SIZE].copy_from_slice(&self.team_a);
        slots[TEAM_SIZE..].copy_from_slice(&self.team_b);
        slots
    }

    /// Returns the split obtained by exchanging the occupants of two
    /// arrangement slots.
    pub fn swapped(&self, left: usize, right: usize) -> Self {
        let mut slots = self.arrangement();
        slots.swap(left, right);
        Self::from_arrangement(slots)
    }

    /// Returns the player holding `role` on team A and team B.
    pub fn role_pair(&self, role: Role) -> (PlayerIndex, PlayerIndex) {
        (self.team_a[role.slot()], self.team_b[role.slot()])
    }

    /// Checks that the two teams are disjoint and cover `0..10`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = [false; ROSTER_SIZE];
        for &player in self.team_a.iter().chain(self.team_b.iter()) {
            if player >= ROSTER_SIZE {
                return Err(TeamForgeError::InvalidSplit(format!(
                    "player {player} is outside the roster"
                )));
            }
            if seen[player] {
                return Err(TeamForgeError::InvalidSplit(format!(
                    "player {player} appears twice"
                )));
            }
            seen[player] = true;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for TeamSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} vs {:?}", self.team_a, self.team_b)
    }
}
