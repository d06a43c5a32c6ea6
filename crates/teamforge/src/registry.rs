//! Matcher registry: variant keys to matchers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use teamforge_config::EngineConfig;
use teamforge_core::{Result, TeamForgeError, ROSTER_SIZE, TEAM_SIZE};
use teamforge_scoring::slots::PEER_RATING_COUNT;

use crate::matcher::{AffinityMatcher, Matcher, RatedRoleMatcher, RoleBalanceMatcher};

/// The closed set of matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherKind {
    Affinity,
    RoleBalance,
    RoleBalanceWithRating,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 3] = [
        MatcherKind::Affinity,
        MatcherKind::RoleBalance,
        MatcherKind::RoleBalanceWithRating,
    ];

    /// Canonical key.
    pub fn key(self) -> &'static str {
        match self {
            MatcherKind::Affinity => "affinity",
            MatcherKind::RoleBalance => "role-balance",
            MatcherKind::RoleBalanceWithRating => "role-balance-with-rating",
        }
    }

    /// Length of every preference vector this matcher produces.
    pub fn vector_len(self) -> usize {
        match self {
            MatcherKind::Affinity => ROSTER_SIZE,
            MatcherKind::RoleBalance => TEAM_SIZE,
            MatcherKind::RoleBalanceWithRating => TEAM_SIZE + PEER_RATING_COUNT,
        }
    }

    /// Builds the matcher for this kind from engine configuration.
    pub fn build(self, config: &EngineConfig) -> Matcher {
        match self {
            MatcherKind::Affinity => Matcher::Affinity(AffinityMatcher::from_config(config)),
            MatcherKind::RoleBalance => {
                Matcher::RoleBalance(RoleBalanceMatcher::from_config(config))
            }
            MatcherKind::RoleBalanceWithRating => {
                Matcher::RoleBalanceWithRating(RatedRoleMatcher::from_config(config))
            }
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MatcherKind {
    type Err = TeamForgeError;

    /// Accepts the canonical keys and the short keys older rooms were
    /// created with (`friend`, `role`, `rolev2`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "affinity" | "friend" => Ok(MatcherKind::Affinity),
            "role-balance" | "role" => Ok(MatcherKind::RoleBalance),
            "role-balance-with-rating" | "rolev2" => Ok(MatcherKind::RoleBalanceWithRating),
            other => Err(TeamForgeError::UnknownMatcher(other.to_string())),
        }
    }
}

/// Resolves a key to a configured matcher.
///
/// # Errors
///
/// Returns [`TeamForgeError::UnknownMatcher`] for an unrecognized key.
pub fn resolve(key: &str, config: &EngineConfig) -> Result<Matcher> {
    Ok(key.parse::<MatcherKind>()?.build(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keys_round_trip() {
        for kind in MatcherKind::ALL {
            assert_eq!(kind.key().parse(), Ok(kind));
            assert_eq!(kind.to_string(), kind.key());
        }
    }

    #[test]
    fn test_short_keys() {
        assert_eq!("friend".parse(), Ok(MatcherKind::Affinity));
        assert_eq!("role".parse(), Ok(MatcherKind::RoleBalance));
        assert_eq!("rolev2".parse(), Ok(MatcherKind::RoleBalanceWithRating));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        assert_eq!(
            "draft".parse::<MatcherKind>(),
            Err(TeamForgeError::UnknownMatcher("draft".to_string()))
        );
        assert!(resolve("", &EngineConfig::default()).is_err());
    }

    #[test]
    fn test_vector_lengths() {
        assert_eq!(MatcherKind::Affinity.vector_len(), 10);
        assert_eq!(MatcherKind::RoleBalance.vector_len(), 5);
        assert_eq!(MatcherKind::RoleBalanceWithRating.vector_len(), 14);
    }

    #[test]
    fn test_build_applies_config() {
        let mut config = EngineConfig::default();
        config.role_balance.move_budget = 7;
        match resolve("role", &config).unwrap() {
            Matcher::RoleBalance(m) => assert_eq!(m.move_budget(), 7),
            other => panic!("resolved to {:?}", other.kind()),
        }
        match MatcherKind::RoleBalanceWithRating.build(&config) {
            Matcher::RoleBalanceWithRating(m) => assert_eq!(m.move_budget(), 10),
            other => panic!("resolved to {:?}", other.kind()),
        }
    }
}
