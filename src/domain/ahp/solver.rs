//! Priority weights and consistency for a single comparison matrix.

use serde::{Deserialize, Serialize};

use super::policy::{random_index, CONSISTENCY_THRESHOLD};
use super::PairwiseMatrix;

/// A weight per matrix row, non-negative and summing to 1 for well-formed input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Weight at `index`, or 0 when the vector is shorter.
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Output of [`AhpSolver::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct AhpSolution {
    pub weights: PriorityVector,
    pub lambda_max: f64,
    pub consistency_index: f64,
    /// Informational only. Nothing rejects a high ratio.
    pub consistency_ratio: f64,
}

impl AhpSolution {
    /// Whether CR is under the conventional 0.1 threshold.
    pub fn is_consistent(&self) -> bool {
        self.consistency_ratio < CONSISTENCY_THRESHOLD
    }
}

/// Column-normalization AHP solver.
pub struct AhpSolver;

impl AhpSolver {
    /// Computes the priority vector and consistency ratio of a matrix.
    ///
    /// # Algorithm
    /// 1. Divide each entry by its column sum
    /// 2. weight[i] = mean of row i of the normalized matrix
    /// 3. lambda_max = (1/n) Σ_i (row_i · w) / w[i], skipping w[i] == 0
    /// 4. CI = (lambda_max - n) / (n - 1), CR = CI / RI[n]
    ///
    /// # Edge Cases
    /// - Empty matrix: empty weights, CR 0
    /// - NaN or infinite entry: read as the neutral value 1
    /// - Zero column sum: that normalized column is all zeros
    /// - n outside the random index table, or RI 0: CR 0
    /// - Slightly negative CR from rounding: clamped to 0
    pub fn solve(matrix: &PairwiseMatrix) -> AhpSolution {
        let n = matrix.size();
        if n == 0 {
            return AhpSolution {
                weights: PriorityVector::default(),
                lambda_max: 0.0,
                consistency_index: 0.0,
                consistency_ratio: 0.0,
            };
        }

        let entries: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|&v| Self::sanitize(v)).collect())
            .collect();

        let column_sums: Vec<f64> = (0..n)
            .map(|j| entries.iter().map(|row| row[j]).sum())
            .collect();

        let weights: Vec<f64> = entries
            .iter()
            .map(|row| {
                let normalized_sum: f64 = row
                    .iter()
                    .zip(&column_sums)
                    .map(|(&v, &sum)| if sum == 0.0 { 0.0 } else { v / sum })
                    .sum();
                let weight = normalized_sum / n as f64;
                if weight.is_finite() {
                    weight
                } else {
                    0.0
                }
            })
            .collect();

        let lambda_max = Self::lambda_max(&entries, &weights);
        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let consistency_ratio = match random_index(n) {
            Some(ri) if ri > 0.0 => Self::non_negative(consistency_index / ri),
            _ => 0.0,
        };

        AhpSolution {
            weights: PriorityVector(weights),
            lambda_max,
            consistency_index,
            consistency_ratio,
        }
    }

    fn lambda_max(entries: &[Vec<f64>], weights: &[f64]) -> f64 {
        let n = entries.len();
        let total: f64 = entries
            .iter()
            .zip(weights)
            .filter(|(_, &w)| w != 0.0)
            .map(|(row, &w)| {
                let weighted: f64 = row.iter().zip(weights).map(|(a, b)| a * b).sum();
                weighted / w
            })
            .sum();
        total / n as f64
    }

    fn sanitize(value: f64) -> f64 {
        if value.is_finite() {
            value
        } else {
            1.0
        }
    }

    fn non_negative(value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
}
