//! Response codecs: raw form fields to preference vectors.
//!
//! Decoding never fails. Missing, blank or malformed fields fall back to
//! each matcher's neutral value so a half-filled questionnaire still
//! produces a usable row.

use std::collections::HashMap;

use teamforge_core::{PlayerIndex, PreferenceVector, Role, EPSILON, ROSTER_SIZE};
use tracing::warn;

/// Highest accepted role confidence.
pub const MAX_ROLE_CONFIDENCE: i64 = 9;

/// Field values submitted by one respondent, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    fields: HashMap<String, String>,
}

impl RawResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RawResponse
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Field name for the affinity answer about the `i`-th other player.
pub fn affinity_key(i: usize) -> String {
    format!("friend{i}")
}

/// Field name for the peer assessment of the `i`-th other player.
pub fn rating_key(i: usize) -> String {
    format!("rate{i}")
}

/// Peer assessment choices and their values.
pub const RATING_CHOICES: [(&str, f64); 3] = [("worse", 0.0), ("unsure", 1.0), ("better", 2.0)];

/// Value of a missing or unrecognized assessment.
pub const NEUTRAL_RATING: f64 = 1.0;

/// Decodes affinity answers into a ten-entry vector.
///
/// The nine answers cover the other players in roster order and land at
/// every index except `respondent`, whose own entry stays 0. Negative,
/// non-finite or unparsable answers count as 0. The result is scaled to
/// sum to 1, with the denominator floored at [`EPSILON`] so an all-zero
/// response stays all zeros.
///
/// `respondent` must be a roster position. Any other index has no place
/// to skip, so the answers are ignored and the vector is all zeros.
pub fn decode_affinity(respondent: PlayerIndex, raw: &RawResponse) -> PreferenceVector {
    let mut values = vec![0.0; ROSTER_SIZE];
    if respondent >= ROSTER_SIZE {
        warn!(
            event = "respondent_out_of_range",
            respondent = respondent as u64,
        );
        return PreferenceVector::new(values);
    }
    let others = (0..ROSTER_SIZE).filter(|&p| p != respondent);
    for (i, player) in others.enumerate() {
        values[player] = raw
            .get(&affinity_key(i))
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0);
    }
    let total = values.iter().sum::<f64>().max(EPSILON);
    values.iter_mut().for_each(|v| *v /= total);
    PreferenceVector::new(values)
}

/// Decodes the five role confidences.
///
/// Each answer must be a whole number; anything else counts as 0.
/// Values are clamped to `0..=9`.
pub fn decode_roles(raw: &RawResponse) -> PreferenceVector {
    PreferenceVector::new(Role::ALL.iter().map(|role| role_confidence(raw, *role)).collect())
}

/// Decodes role confidences followed by nine peer assessments.
pub fn decode_rated_roles(raw: &RawResponse) -> PreferenceVector {
    let mut values = decode_roles(raw).into_inner();
    values.extend((0..ROSTER_SIZE - 1).map(|i| peer_assessment(raw.get(&rating_key(i)))));
    PreferenceVector::new(values)
}

fn role_confidence(raw: &RawResponse, role: Role) -> f64 {
    raw.get(role.key())
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|v| v.clamp(0, MAX_ROLE_CONFIDENCE) as f64)
        .unwrap_or(0.0)
}

fn peer_assessment(value: Option<&str>) -> f64 {
    value
        .and_then(|v| RATING_CHOICES.iter().find(|(key, _)| *key == v.trim()))
        .map(|(_, score)| *score)
        .unwrap_or(NEUTRAL_RATING)
}
