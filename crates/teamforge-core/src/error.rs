//! Error types for TeamForge

use thiserror::Error;

/// Main error type for TeamForge operations
#[derive(Debug, Error, PartialEq)]
pub enum TeamForgeError {
    /// The roster or preference matrix does not hold exactly ten players
    #[error("expected {expected} players, found {found}")]
    RosterSize { expected: usize, found: usize },

    /// A preference vector has the wrong length for the matcher
    #[error("player {player} has {found} preference values, expected {expected}")]
    VectorLength {
        player: usize,
        expected: usize,
        found: usize,
    },

    /// A player name appears more than once in the roster
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    /// A player name is blank
    #[error("player {0} has an empty name")]
    EmptyPlayerName(usize),

    /// Two teams do not partition the roster
    #[error("invalid team split: {0}")]
    InvalidSplit(String),

    /// Unrecognized matcher key
    #[error("unknown matcher: {0}")]
    UnknownMatcher(String),

    /// Unrecognized scoring strategy key
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A respondent index outside the roster
    #[error("respondent {0} is not on the roster")]
    RespondentOutOfRange(usize),
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;
