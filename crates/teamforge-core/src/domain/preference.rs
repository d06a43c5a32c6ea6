//! Preference vectors and the preference matrix.

use std::ops::Index;

use super::{PlayerIndex, ROSTER_SIZE};
use crate::error::{Result, TeamForgeError};

/// One player's decoded answers.
///
/// Length and meaning depend on the matcher: ten affinities, five role
/// confidences, or five role confidences followed by nine peer ratings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PreferenceVector {
    values: Vec<f64>,
}

impl PreferenceVector {
    /// Creates a vector from raw values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, or 0 when out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for PreferenceVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for PreferenceVector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl Index<usize> for PreferenceVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// All ten players' preference vectors in roster order.
///
/// Construction guarantees exactly [`ROSTER_SIZE`] rows of equal length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PreferenceMatrix {
    rows: Vec<PreferenceVector>,
    width: usize,
}

impl PreferenceMatrix {
    /// Builds a matrix, checking the row count and that every row has
    /// `expected_len` entries.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::RosterSize`] when there are not exactly ten
    /// rows and [`TeamForgeError::VectorLength`] for the first row of the
    /// wrong length.
    pub fn new(rows: Vec<PreferenceVector>, expected_len: usize) -> Result<Self> {
        if rows.len() != ROSTER_SIZE {
            return Err(TeamForgeError::RosterSize {
                expected: ROSTER_SIZE,
                found: rows.len(),
            });
        }
        if let Some((player, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected_len)
        {
            return Err(TeamForgeError::VectorLength {
                player,
                expected: expected_len,
                found: row.len(),
            });
        }
        Ok(Self {
            rows,
            width: expected_len,
        })
    }

    /// Builds a matrix from plain nested vectors.
    pub fn from_rows(rows: Vec<Vec<f64>>, expected_len: usize) -> Result<Self> {
        Self::new(rows.into_iter().map(PreferenceVector::new).collect(), expected_len)
    }

    /// Number of entries in each row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns a player's preference vector.
    pub fn row(&self, player: PlayerIndex) -> &PreferenceVector {
        &self.rows[player]
    }

    /// Returns `player`'s value at `index`.
    #[inline]
    pub fn value(&self, player: PlayerIndex, index: usize) -> f64 {
        self.rows[player][index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &PreferenceVector> {
        self.rows.iter()
    }
}
