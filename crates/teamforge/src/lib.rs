//! TeamForge - balanced 5v5 team suggestions
//!
//! Ten players answer a short questionnaire; a matcher turns the answers
//! into a preference matrix and searches for the fairest split into two
//! teams of five.
//!
//! Three matchers are available, selected by [`MatcherKind`]:
//!
//! | Kind | Answers | Search |
//! |---|---|---|
//! | `affinity` | how much you like playing with each other player | exhaustive |
//! | `role-balance` | confidence per role | local search, role slots |
//! | `role-balance-with-rating` | role confidence plus peer ratings | local search, role slots |
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use teamforge::prelude::*;
//!
//! let rows: Vec<Vec<f64>> = (0..10)
//!     .map(|p| vec![p as f64, 5.0, 5.0, 5.0, 5.0])
//!     .collect();
//! let matrix = PreferenceMatrix::from_rows(rows, 5).unwrap();
//!
//! let engine = TeamFormationEngine::default();
//! let mut rng = StdRng::seed_from_u64(1);
//! let suggestion = engine.suggest(MatcherKind::RoleBalance, &matrix, &mut rng).unwrap();
//! assert!(suggestion.split.is_valid());
//! ```

pub mod codec;
#[cfg(feature = "console")]
pub mod console;
pub mod engine;
pub mod explanation;
pub mod matcher;
pub mod query;
pub mod registry;
pub mod suggestion;

pub use codec::RawResponse;
pub use engine::{SuggestRequest, TeamFormationEngine};
pub use explanation::Explanation;
pub use matcher::{AffinityMatcher, Matcher, RatedRoleMatcher, RoleBalanceMatcher, RoleSlotMatcher};
pub use query::{FieldDescriptor, FieldKind, Query, QueryContext};
pub use registry::MatcherKind;
pub use suggestion::{NamedSuggestion, Suggestion};

pub use teamforge_config::{ConfigError, EngineConfig};
pub use teamforge_core::{
    PreferenceMatrix, PreferenceVector, Result, Role, Roster, TeamForgeError, TeamSplit,
};

pub mod prelude {
    pub use super::{
        EngineConfig, Explanation, Matcher, MatcherKind, PreferenceMatrix, PreferenceVector,
        QueryContext, RawResponse, Roster, Suggestion, TeamFormationEngine, TeamSplit,
    };
}
