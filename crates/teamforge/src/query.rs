//! Questionnaire descriptions shown to each respondent.

use serde::Serialize;
use teamforge_core::{PlayerIndex, Result, Roster, TeamForgeError, ROSTER_SIZE};

/// Kind of input a field expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "choices")]
pub enum FieldKind {
    Number,
    /// One of a fixed set of options.
    Choice(Vec<String>),
}

/// One input of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Form field name the codec reads back.
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Number,
        }
    }

    pub fn choice<I, S>(key: impl Into<String>, label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Choice(choices.into_iter().map(Into::into).collect()),
        }
    }
}

/// Everything needed to render one respondent's questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub prompt: String,
    pub hint: String,
    pub fields: Vec<FieldDescriptor>,
    /// Page template to render with, when the matcher needs a custom one.
    pub template: Option<String>,
    /// Extra context for the page, such as the other players' names.
    pub extra: Option<Vec<String>>,
}

/// The lobby and the respondent a query is for.
#[derive(Debug, Clone, Copy)]
pub struct QueryContext<'a> {
    roster: &'a Roster,
    respondent: PlayerIndex,
}

impl<'a> QueryContext<'a> {
    /// # Errors
    ///
    /// Returns [`TeamForgeError::RespondentOutOfRange`] when `respondent`
    /// is not a roster position.
    pub fn new(roster: &'a Roster, respondent: PlayerIndex) -> Result<Self> {
        if respondent >= ROSTER_SIZE {
            return Err(TeamForgeError::RespondentOutOfRange(respondent));
        }
        Ok(Self { roster, respondent })
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    pub fn respondent(&self) -> PlayerIndex {
        self.respondent
    }

    pub fn respondent_name(&self) -> &'a str {
        self.roster.name(self.respondent)
    }

    /// The other nine players, in roster order.
    pub fn other_players(&self) -> Vec<String> {
        self.roster.others(self.respondent)
    }
}
