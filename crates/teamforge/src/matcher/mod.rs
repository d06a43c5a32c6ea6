//! The three matchers behind one closed enum.
//!
//! Each matcher describes its questionnaire, decodes answers into a
//! preference vector, and searches a preference matrix for a split.
//! Affinity scores whole teams and enumerates every split; the two role
//! matchers score role slots and share one local search implementation,
//! differing only in how the matrix is reshaped and which score function
//! runs.

mod affinity;
mod role_slots;

pub use affinity::AffinityMatcher;
pub use role_slots::{RatedRoleMatcher, Reshape, RoleBalanceMatcher, RoleSlotMatcher};

use rand::Rng;
use teamforge_core::{PlayerIndex, PreferenceMatrix, PreferenceVector, Result, TeamForgeError};

use crate::codec::RawResponse;
use crate::query::{Query, QueryContext};
use crate::registry::MatcherKind;
use crate::suggestion::Suggestion;

/// A configured matcher.
#[derive(Debug, Clone)]
pub enum Matcher {
    Affinity(AffinityMatcher),
    RoleBalance(RoleBalanceMatcher),
    RoleBalanceWithRating(RatedRoleMatcher),
}

impl Matcher {
    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Affinity(_) => MatcherKind::Affinity,
            Matcher::RoleBalance(_) => MatcherKind::RoleBalance,
            Matcher::RoleBalanceWithRating(_) => MatcherKind::RoleBalanceWithRating,
        }
    }

    /// Length of every vector [`Matcher::decode_response`] returns.
    pub fn vector_len(&self) -> usize {
        self.kind().vector_len()
    }

    /// What to ask the respondent in `context`.
    pub fn describe_query(&self, context: &QueryContext<'_>) -> Query {
        match self {
            Matcher::Affinity(m) => m.describe_query(context),
            Matcher::RoleBalance(m) => m.describe_query(context),
            Matcher::RoleBalanceWithRating(m) => m.describe_query(context),
        }
    }

    /// Decodes one respondent's raw answers.
    ///
    /// Never fails: missing or malformed answers decode to neutral values.
    pub fn decode_response(&self, respondent: PlayerIndex, raw: &RawResponse) -> PreferenceVector {
        match self {
            Matcher::Affinity(m) => m.decode_response(respondent, raw),
            Matcher::RoleBalance(m) => m.decode_response(raw),
            Matcher::RoleBalanceWithRating(m) => m.decode_response(raw),
        }
    }

    /// Searches `matrix` for the best split.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::VectorLength`] when the matrix width does
    /// not match this matcher.
    pub fn generate_teams<R: Rng + ?Sized>(
        &self,
        matrix: &PreferenceMatrix,
        rng: &mut R,
    ) -> Result<Suggestion> {
        let expected = self.vector_len();
        if matrix.width() != expected {
            return Err(TeamForgeError::VectorLength {
                player: 0,
                expected,
                found: matrix.width(),
            });
        }

        let (outcome, explanation) = match self {
            Matcher::Affinity(m) => m.generate_teams(matrix, rng)?,
            Matcher::RoleBalance(m) => m.generate_teams(matrix, rng)?,
            Matcher::RoleBalanceWithRating(m) => m.generate_teams(matrix, rng)?,
        };
        Ok(Suggestion::new(self.kind(), outcome, explanation))
    }
}

impl From<AffinityMatcher> for Matcher {
    fn from(matcher: AffinityMatcher) -> Self {
        Matcher::Affinity(matcher)
    }
}

impl From<RoleBalanceMatcher> for Matcher {
    fn from(matcher: RoleBalanceMatcher) -> Self {
        Matcher::RoleBalance(matcher)
    }
}

impl From<RatedRoleMatcher> for Matcher {
    fn from(matcher: RatedRoleMatcher) -> Self {
        Matcher::RoleBalanceWithRating(matcher)
    }
}
