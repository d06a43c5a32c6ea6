//! Role-slot matching by local search.
//!
//! Both role matchers search over slot arrangements: position `i` of a
//! team plays role `i`. What differs is how the preference matrix becomes
//! per-slot values and which score function ranks them, so one generic
//! matcher is composed from those two parts.

use rand::Rng;
use teamforge_config::EngineConfig;
use teamforge_core::{PreferenceMatrix, PreferenceVector, Result, Role};
use teamforge_scoring::{Jitter, RatedRoleScore, RoleBalanceScore, SlotScoreFunction, SlotTable};
use teamforge_solver::{LocalSearch, SearchOutcome};

use crate::codec::{self, RawResponse};
use crate::explanation::Explanation;
use crate::query::{FieldDescriptor, Query, QueryContext};

/// Turns a preference matrix into per-slot values.
pub type Reshape = fn(&PreferenceMatrix) -> Result<SlotTable>;

/// Local search over role slots, scored by `F`.
#[derive(Debug, Clone)]
pub struct RoleSlotMatcher<F> {
    score_fn: F,
    reshape: Reshape,
    search: LocalSearch,
    jitter: Jitter,
}

/// Balances role confidence.
pub type RoleBalanceMatcher = RoleSlotMatcher<RoleBalanceScore>;

/// Balances role confidence and peer ratings.
pub type RatedRoleMatcher = RoleSlotMatcher<RatedRoleScore>;

impl<F: SlotScoreFunction> RoleSlotMatcher<F> {
    pub fn new(score_fn: F, reshape: Reshape, move_budget: u64) -> Self {
        Self {
            score_fn,
            reshape,
            search: LocalSearch::new(move_budget),
            jitter: Jitter::disabled(),
        }
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn score_fn(&self) -> &F {
        &self.score_fn
    }

    pub fn move_budget(&self) -> u64 {
        self.search.move_budget()
    }

    /// Runs one local search from a random start.
    ///
    /// The explanation is the score report of the winning split, computed
    /// without jitter.
    ///
    /// # Errors
    ///
    /// Returns [`teamforge_core::TeamForgeError::VectorLength`] when the
    /// matrix width does not match the reshape step.
    pub fn generate_teams<R: Rng + ?Sized>(
        &self,
        matrix: &PreferenceMatrix,
        rng: &mut R,
    ) -> Result<(SearchOutcome, Explanation)> {
        let table = (self.reshape)(matrix)?;
        let outcome = self.search.solve(rng, |split, rng| {
            let score = self.score_fn.score(
                &table.team_slots(&split.team_a),
                &table.team_slots(&split.team_b),
            );
            self.jitter.apply(score, rng)
        });

        let breakdown = self.score_fn.evaluate(
            &table.team_slots(&outcome.split.team_a),
            &table.team_slots(&outcome.split.team_b),
        );
        Ok((outcome, Explanation::Report(breakdown.to_string())))
    }
}

fn role_fields() -> Vec<FieldDescriptor> {
    Role::ALL
        .iter()
        .map(|role| FieldDescriptor::number(role.key(), role.label()))
        .collect()
}

fn role_query(context: &QueryContext<'_>, fields: Vec<FieldDescriptor>, template: &str) -> Query {
    Query {
        prompt: "Roughly how many of the other players can you beat at each role? \
                 Assume that your best 3 champions for each role are banned."
            .to_string(),
        hint: "Answer as a value from 0 to 9. Other players are:".to_string(),
        fields,
        template: Some(template.to_string()),
        extra: Some(context.other_players()),
    }
}

impl RoleBalanceMatcher {
    pub fn from_config(config: &EngineConfig) -> Self {
        let search = &config.role_balance;
        Self::new(
            RoleBalanceScore::new(config.epsilon),
            SlotTable::from_role_confidence,
            search.move_budget,
        )
        .with_jitter(Jitter::from_flag(search.jitter))
    }

    pub fn describe_query(&self, context: &QueryContext<'_>) -> Query {
        role_query(context, role_fields(), "respond_page_rm1.html")
    }

    pub fn decode_response(&self, raw: &RawResponse) -> PreferenceVector {
        codec::decode_roles(raw)
    }
}

impl Default for RoleBalanceMatcher {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl RatedRoleMatcher {
    pub fn from_config(config: &EngineConfig) -> Self {
        let search = &config.role_balance_with_rating;
        Self::new(
            RatedRoleScore::new(config.epsilon),
            SlotTable::with_peer_ratings,
            search.move_budget,
        )
        .with_jitter(Jitter::from_flag(search.jitter))
    }

    /// Role questions followed by one peer assessment per other player.
    pub fn describe_query(&self, context: &QueryContext<'_>) -> Query {
        let mut fields = role_fields();
        fields.extend(context.other_players().into_iter().enumerate().map(|(i, name)| {
            FieldDescriptor::choice(
                codec::rating_key(i),
                name,
                codec::RATING_CHOICES.iter().map(|(key, _)| *key),
            )
        }));
        role_query(context, fields, "respond_page_rm2.html")
    }

    pub fn decode_response(&self, raw: &RawResponse) -> PreferenceVector {
        codec::decode_rated_roles(raw)
    }
}

impl Default for RatedRoleMatcher {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
