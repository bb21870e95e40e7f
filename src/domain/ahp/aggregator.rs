//! Combines criteria weights with per-criterion alternative weights into a ranking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Percentage, RequestId};

use super::{Criterion, PriorityVector};

/// An alternative as seen by the aggregator: optional identity and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeRef {
    pub id: Option<RequestId>,
    pub name: String,
}

impl AlternativeRef {
    /// A label-only alternative, as used by comparison-driven rankings.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: RequestId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position.
    pub rank: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_id: Option<RequestId>,
    pub name: String,
    pub score: f64,
    pub percent: Percentage,
}

impl RankedEntry {
    /// Score rendered with six decimals.
    pub fn score_display(&self) -> String {
        format!("{:.6}", self.score)
    }
}

/// Min and max final score of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Alternatives ordered by descending final score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps entries that are already in rank order, e.g. read back from storage.
    pub fn from_entries(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    /// Looks up the entry for a given alternative id.
    pub fn find(&self, id: RequestId) -> Option<&RankedEntry> {
        self.entries.iter().find(|e| e.alternative_id == Some(id))
    }

    /// Range of final scores. Reported for display only; percentages are
    /// share-of-total and do not use it.
    pub fn score_range(&self) -> Option<ScoreRange> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        Some(ScoreRange {
            min: last.score,
            max: first.score,
        })
    }
}

/// Aggregation functions.
pub struct Aggregator;

impl Aggregator {
    /// Computes `final[i] = Σ_c criteria_weights[c] * per_criterion[c][i]`.
    ///
    /// # Edge Cases
    /// - Criterion without an alternative vector: contributes nothing
    /// - Vector shorter than `n`: missing entries read as 0
    /// - Criterion key not in `criteria`: ignored
    pub fn final_scores(
        criteria: &[Criterion],
        criteria_weights: &PriorityVector,
        per_criterion: &BTreeMap<Criterion, PriorityVector>,
        n: usize,
    ) -> Vec<f64> {
        let mut scores = vec![0.0; n];

        for (c, criterion) in criteria.iter().enumerate() {
            let Some(alternative_weights) = per_criterion.get(criterion) else {
                continue;
            };
            let criterion_weight = criteria_weights.get(c);
            for (i, score) in scores.iter_mut().enumerate() {
                *score += criterion_weight * alternative_weights.get(i);
            }
        }

        scores
    }

    /// Orders alternatives by descending score and attaches percentages.
    ///
    /// The sort is stable, so equal scores keep input order. Percent is each
    /// score's share of the sum of all scores.
    pub fn rank(alternatives: &[AlternativeRef], final_scores: &[f64]) -> RankedResult {
        let mut scored: Vec<(&AlternativeRef, f64)> = alternatives
            .iter()
            .zip(final_scores.iter().copied())
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let total: f64 = scored.iter().map(|(_, s)| s).sum();

        let entries = scored
            .into_iter()
            .enumerate()
            .map(|(position, (alternative, score))| RankedEntry {
                rank: position + 1,
                alternative_id: alternative.id,
                name: alternative.name.clone(),
                score,
                percent: Percentage::share_of(score, total),
            })
            .collect();

        RankedResult { entries }
    }

    /// Combines both steps.
    pub fn aggregate(
        criteria: &[Criterion],
        criteria_weights: &PriorityVector,
        per_criterion: &BTreeMap<Criterion, PriorityVector>,
        alternatives: &[AlternativeRef],
    ) -> RankedResult {
        if alternatives.is_empty() {
            return RankedResult::empty();
        }
        let scores =
            Self::final_scores(criteria, criteria_weights, per_criterion, alternatives.len());
        Self::rank(alternatives, &scores)
    }
}
