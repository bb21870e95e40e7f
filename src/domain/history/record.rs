//! Stored AHP computations.
//!
//! A record is created once per comparison-driven ranking and never changes
//! afterwards, apart from the one-way soft delete.

use std::collections::BTreeMap;

use crate::domain::ahp::{AhpComputation, Criterion, MatrixAnalysis, RankedResult};
use crate::domain::foundation::{DomainError, ErrorCode, HistoryId, RequestId, Timestamp};

use super::views::{AlternativeSummary, CriteriaSummary, GlobalPriorityEntry, LabeledWeight};
use super::HistoryStatus;

/// A computation that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryDraft {
    computation: AhpComputation,
    reference_request: RequestId,
    created_at: Timestamp,
}

impl HistoryDraft {
    pub fn new(computation: AhpComputation, reference_request: RequestId) -> Self {
        Self {
            computation,
            reference_request,
            created_at: Timestamp::now(),
        }
    }

    pub fn computation(&self) -> &AhpComputation {
        &self.computation
    }

    pub fn reference_request(&self) -> RequestId {
        self.reference_request
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// A stored computation.
///
/// # Invariants
///
/// - Content fields are fixed at creation
/// - `status` only moves Visible -> Deleted
///
/// Records read back from storage may lack the criteria analysis or some
/// per-criterion analyses when the stored text could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    id: HistoryId,
    criteria: Vec<Criterion>,
    criteria_analysis: Option<MatrixAnalysis>,
    alternatives: Vec<String>,
    alternative_analyses: BTreeMap<Criterion, MatrixAnalysis>,
    ranking: RankedResult,
    reference_request: RequestId,
    status: HistoryStatus,
    created_at: Timestamp,
}

impl HistoryRecord {
    /// Creates the visible record for a freshly stored draft.
    pub fn from_draft(id: HistoryId, draft: HistoryDraft) -> Self {
        let HistoryDraft {
            computation,
            reference_request,
            created_at,
        } = draft;
        Self {
            id,
            criteria: computation.criteria,
            criteria_analysis: Some(computation.criteria_analysis),
            alternatives: computation.alternatives,
            alternative_analyses: computation.alternative_analyses,
            ranking: computation.ranking,
            reference_request,
            status: HistoryStatus::Visible,
            created_at,
        }
    }

    /// Reconstitute a record from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: HistoryId,
        criteria: Vec<Criterion>,
        criteria_analysis: Option<MatrixAnalysis>,
        alternatives: Vec<String>,
        alternative_analyses: BTreeMap<Criterion, MatrixAnalysis>,
        ranking: RankedResult,
        reference_request: RequestId,
        status: HistoryStatus,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            criteria,
            criteria_analysis,
            alternatives,
            alternative_analyses,
            ranking,
            reference_request,
            status,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> HistoryId {
        self.id
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criteria_analysis(&self) -> Option<&MatrixAnalysis> {
        self.criteria_analysis.as_ref()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn alternative_analyses(&self) -> &BTreeMap<Criterion, MatrixAnalysis> {
        &self.alternative_analyses
    }

    pub fn ranking(&self) -> &RankedResult {
        &self.ranking
    }

    pub fn reference_request(&self) -> RequestId {
        self.reference_request
    }

    pub fn status(&self) -> HistoryStatus {
        self.status
    }

    pub fn is_visible(&self) -> bool {
        self.status.is_visible()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Hide the record without removing its data.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if already deleted
    pub fn soft_delete(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&HistoryStatus::Deleted) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "AHP history is already deleted",
            ));
        }
        self.status = HistoryStatus::Deleted;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────

    /// Criteria labels with their weights (4 decimals), CR and matrix.
    pub fn criteria_summary(&self) -> CriteriaSummary {
        let list: Vec<String> = self.criteria.iter().map(|c| c.label().to_string()).collect();
        let weights = self
            .criteria_analysis
            .as_ref()
            .map(|analysis| {
                list.iter()
                    .zip(analysis.weights.iter())
                    .map(|(name, weight)| LabeledWeight {
                        name: name.clone(),
                        weight: format!("{:.4}", weight),
                    })
                    .collect()
            })
            .unwrap_or_default();

        CriteriaSummary {
            total: list.len(),
            list,
            cr: self.criteria_analysis.as_ref().map(|a| a.cr),
            weights,
            matrix: self.criteria_analysis.as_ref().map(|a| a.matrix.clone()),
        }
    }

    /// One summary per analysed criterion, in canonical criterion order.
    pub fn alternative_summaries(&self) -> Vec<AlternativeSummary> {
        self.alternative_analyses
            .iter()
            .map(|(criterion, analysis)| AlternativeSummary {
                criterion: *criterion,
                cr: analysis.cr,
                weights: analysis.weights.clone(),
                matrix: analysis.matrix.clone(),
            })
            .collect()
    }

    /// Ranking as `{rank, name, score}` with the score at 6 decimals.
    pub fn global_priority(&self) -> Vec<GlobalPriorityEntry> {
        self.ranking
            .entries()
            .iter()
            .enumerate()
            .map(|(position, entry)| GlobalPriorityEntry {
                rank: position + 1,
                name: entry.name.clone(),
                score: entry.score_display(),
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::ahp::{
        Comparison, ComparisonInput, NoopObserver, RankingPipeline, RankingPolicy,
    };

    /// Two criteria judged over two alternatives.
    pub fn comparison_input() -> ComparisonInput {
        let mut alternative_comparisons = BTreeMap::new();
        alternative_comparisons.insert(
            Criterion::Urgency,
            vec![Comparison::new("Seminar", "Concert", 3.0)],
        );
        alternative_comparisons.insert(
            Criterion::Importance,
            vec![Comparison::new("Concert", "Seminar", 5.0)],
        );

        ComparisonInput {
            criteria: vec![Criterion::Urgency, Criterion::Importance],
            criteria_comparisons: vec![Comparison::new("Urgency", "Importance", 3.0)],
            alternatives: vec!["Seminar".to_string(), "Concert".to_string()],
            alternative_comparisons,
        }
    }

    pub fn computation() -> AhpComputation {
        let policy = RankingPolicy::default();
        RankingPipeline::new(&policy, &NoopObserver).rank_by_comparisons(&comparison_input())
    }

    pub fn draft(reference: i64) -> HistoryDraft {
        HistoryDraft::new(computation(), RequestId::new(reference))
    }

    pub fn record(id: i64) -> HistoryRecord {
        HistoryRecord::from_draft(HistoryId::new(id).unwrap(), draft(1))
    }
}
