//! Display shapes derived from a history record.

use serde::Serialize;

use crate::domain::ahp::{Criterion, PairwiseMatrix, PriorityVector};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledWeight {
    pub name: String,
    /// Four decimals.
    pub weight: String,
}

/// Criteria-level view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaSummary {
    pub total: usize,
    pub list: Vec<String>,
    pub cr: Option<f64>,
    pub weights: Vec<LabeledWeight>,
    pub matrix: Option<PairwiseMatrix>,
}

/// Alternative weights under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeSummary {
    pub criterion: Criterion,
    pub cr: f64,
    pub weights: PriorityVector,
    pub matrix: PairwiseMatrix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalPriorityEntry {
    pub rank: usize,
    pub name: String,
    /// Six decimals.
    pub score: String,
}
