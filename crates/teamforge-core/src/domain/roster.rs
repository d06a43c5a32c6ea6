//! Named player roster.

use std::collections::HashSet;

use super::{PlayerIndex, ROSTER_SIZE};
use crate::error::{Result, TeamForgeError};

/// The ten player names of a lobby, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Creates a roster from ten unique, non-blank names.
    ///
    /// Names are trimmed before validation.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();
        if names.len() != ROSTER_SIZE {
            return Err(TeamForgeError::RosterSize {
                expected: ROSTER_SIZE,
                found: names.len(),
            });
        }
        let mut seen = HashSet::with_capacity(ROSTER_SIZE);
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(TeamForgeError::EmptyPlayerName(index));
            }
            if !seen.insert(name.as_str()) {
                return Err(TeamForgeError::DuplicatePlayer(name.clone()));
            }
        }
        Ok(Self { names })
    }

    pub fn name(&self, player: PlayerIndex) -> &str {
        &self.names[player]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Looks up a player's roster position by name.
    pub fn position(&self, name: &str) -> Option<PlayerIndex> {
        self.names.iter().position(|n| n == name)
    }

    /// Everyone except `player`, in roster order.
    pub fn others(&self, player: PlayerIndex) -> Vec<String> {
        self.names
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != player)
            .map(|(_, n)| n.clone())
            .collect()
    }
}
