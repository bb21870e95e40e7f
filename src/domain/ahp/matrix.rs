//! Pairwise comparison matrices and their construction.

use serde::{Deserialize, Serialize};

use super::SaatyScale;
use super::policy::ZERO_SCORE_EPSILON;
use crate::domain::foundation::ValidationError;

/// Square matrix of relative-preference ratios.
///
/// Matrices produced by [`MatrixBuilder`] have a unit diagonal and are
/// reciprocal: `m[j][i] == 1 / m[i][j]`. Matrices read back from storage are
/// only checked for squareness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// An `n x n` matrix of ones: every pair judged equal.
    pub fn ones(n: usize) -> Self {
        Self {
            rows: vec![vec![1.0; n]; n],
        }
    }

    /// Wraps raw rows, rejecting anything that is not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(ValidationError::invalid_format(
                "matrix",
                format!("expected {} columns per row, found {}", n, row.len()),
            ));
        }
        Ok(Self { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// True when the diagonal is 1 and every pair multiplies to 1.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            (self.rows[i][i] - 1.0).abs() <= tolerance
                && (0..n).all(|j| (self.rows[i][j] * self.rows[j][i] - 1.0).abs() <= tolerance)
        })
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.rows[i][j] = value;
        self.rows[j][i] = 1.0 / value;
    }
}

/// One pairwise judgment: `item1` is preferred over `item2` by `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub item1: String,
    pub item2: String,
    pub value: f64,
}

impl Comparison {
    pub fn new(item1: impl Into<String>, item2: impl Into<String>, value: f64) -> Self {
        Self {
            item1: item1.into(),
            item2: item2.into(),
            value,
        }
    }

    /// True when both `value` and its reciprocal are finite and positive.
    pub fn has_usable_value(&self) -> bool {
        self.value.is_finite() && self.value > 0.0 && (1.0 / self.value).is_finite()
    }

    pub fn is_self_comparison(&self) -> bool {
        self.item1 == self.item2
    }
}

/// Builds reciprocal comparison matrices.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Builds a matrix from explicit pairwise judgments.
    ///
    /// Starts from all ones and applies each comparison in order, so a later
    /// judgment on the same pair wins.
    ///
    /// # Edge Cases
    /// - Label not in `items`: comparison dropped, pair stays at 1
    /// - Self-comparison (`item1 == item2`): dropped, diagonal stays 1
    /// - Non-positive value, or one whose reciprocal is not finite: dropped
    /// - Empty `items`: empty matrix
    pub fn from_comparisons<S: AsRef<str>>(items: &[S], comparisons: &[Comparison]) -> PairwiseMatrix {
        let mut matrix = PairwiseMatrix::ones(items.len());

        for comparison in comparisons {
            if let Some((i, j)) = Self::locate(items, comparison) {
                matrix.set_pair(i, j, comparison.value);
            }
        }

        matrix
    }

    /// Returns the comparisons [`from_comparisons`](Self::from_comparisons)
    /// would drop for these items.
    pub fn unmatched<'a, S: AsRef<str>>(
        items: &[S],
        comparisons: &'a [Comparison],
    ) -> Vec<&'a Comparison> {
        comparisons
            .iter()
            .filter(|c| Self::locate(items, c).is_none())
            .collect()
    }

    /// Builds a matrix from per-item scores: `entry[i][j] = clip(s[i] / s[j])`.
    ///
    /// # Edge Cases
    /// - `s[j] == 0`, `s[i] != 0`: divides by a negligible epsilon, saturating
    ///   to the scale ceiling for positive `s[i]`
    /// - both zero: 1
    /// - ratio non-finite or non-positive: 1
    ///
    /// Positive scores give a reciprocal matrix whose ratios compose exactly,
    /// so its consistency ratio is zero up to clipping.
    pub fn from_scores(scores: &[f64], scale: &SaatyScale) -> PairwiseMatrix {
        let n = scores.len();
        let mut rows = vec![vec![1.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (numerator, denominator) = (scores[i], scores[j]);
                rows[i][j] = if numerator == 0.0 && denominator == 0.0 {
                    1.0
                } else if denominator == 0.0 {
                    scale.clip(numerator / ZERO_SCORE_EPSILON)
                } else {
                    scale.clip(numerator / denominator)
                };
            }
        }

        PairwiseMatrix { rows }
    }

    fn locate<S: AsRef<str>>(items: &[S], comparison: &Comparison) -> Option<(usize, usize)> {
        if !comparison.has_usable_value() {
            return None;
        }
        let i = items.iter().position(|s| s.as_ref() == comparison.item1)?;
        let j = items.iter().position(|s| s.as_ref() == comparison.item2)?;
        (i != j).then_some((i, j))
    }
}
