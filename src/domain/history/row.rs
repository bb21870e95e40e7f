//! Text-column storage shape of a history record.
//!
//! Columns:
//! - `criteria`: comma-joined criterion labels
//! - `criteria_comparison`: JSON `{matrix, weights, cr}`
//! - `alternatives`: comma-joined alternative names
//! - `alternative_comparison`: JSON object keyed by criterion label
//! - `priority_global`: JSON `{alternatives, priority}`
//!
//! Encoding fails as a whole so that nothing half-built is written. Decoding
//! is lenient: a column that cannot be parsed reads as absent or empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::ahp::{Criterion, MatrixAnalysis, RankedEntry, RankedResult};
use crate::domain::foundation::{DomainError, ErrorCode, HistoryId, RequestId, Timestamp};

use super::{HistoryDraft, HistoryRecord, HistoryStatus};

const LIST_SEPARATOR: &str = ",";

#[derive(Serialize)]
struct PriorityColumn<'a> {
    alternatives: &'a [String],
    priority: &'a [RankedEntry],
}

#[derive(Deserialize)]
struct LenientPriorityColumn {
    #[serde(default)]
    alternatives: Option<Vec<String>>,
    #[serde(default)]
    priority: Vec<Value>,
}

/// One stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    /// Zero until the store assigns an id.
    pub id: i64,
    pub criteria: String,
    pub criteria_comparison: String,
    pub alternatives: String,
    pub alternative_comparison: String,
    pub priority_global: String,
    pub reference_request: i64,
    pub is_delete: bool,
    pub created_at: DateTime<Utc>,
}

impl HistoryRow {
    /// Encodes a draft into column values.
    ///
    /// # Errors
    ///
    /// - `SerializationError` if any JSON column cannot be produced
    pub fn encode(draft: &HistoryDraft) -> Result<Self, DomainError> {
        let computation = draft.computation();

        let criteria_comparison = to_json(&computation.criteria_analysis)?;
        let alternative_comparison = to_json(&computation.alternative_analyses)?;
        let priority_global = to_json(&PriorityColumn {
            alternatives: &computation.alternatives,
            priority: computation.ranking.entries(),
        })?;

        Ok(Self {
            id: 0,
            criteria: computation
                .criteria
                .iter()
                .map(Criterion::label)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            criteria_comparison,
            alternatives: computation.alternatives.join(LIST_SEPARATOR),
            alternative_comparison,
            priority_global,
            reference_request: draft.reference_request().value(),
            is_delete: false,
            created_at: *draft.created_at().as_datetime(),
        })
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Decodes column values back into a record.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the row id is not a valid history id
    pub fn decode(self) -> Result<HistoryRecord, DomainError> {
        let id = HistoryId::new(self.id)?;

        let criteria = split_list(&self.criteria)
            .filter_map(|label| label.parse::<Criterion>().ok())
            .collect();

        let criteria_analysis = serde_json::from_str::<MatrixAnalysis>(&self.criteria_comparison).ok();

        let alternative_analyses = serde_json::from_str::<BTreeMap<String, Value>>(
            &self.alternative_comparison,
        )
        .map(|raw| {
            raw.into_iter()
                .filter_map(|(label, value)| {
                    let criterion = label.parse::<Criterion>().ok()?;
                    let analysis = serde_json::from_value::<MatrixAnalysis>(value).ok()?;
                    Some((criterion, analysis))
                })
                .collect()
        })
        .unwrap_or_default();

        let priority = serde_json::from_str::<LenientPriorityColumn>(&self.priority_global).ok();
        let alternatives = priority
            .as_ref()
            .and_then(|p| p.alternatives.clone())
            .unwrap_or_else(|| split_list(&self.alternatives).map(str::to_string).collect());
        let ranking = RankedResult::from_entries(
            priority
                .map(|p| {
                    p.priority
                        .into_iter()
                        .filter_map(|v| serde_json::from_value::<RankedEntry>(v).ok())
                        .collect()
                })
                .unwrap_or_default(),
        );

        Ok(HistoryRecord::reconstitute(
            id,
            criteria,
            criteria_analysis,
            alternatives,
            alternative_analyses,
            ranking,
            RequestId::new(self.reference_request),
            HistoryStatus::from_deleted_flag(self.is_delete),
            Timestamp::from_datetime(self.created_at),
        ))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| {
        DomainError::new(
            ErrorCode::SerializationError,
            format!("Failed to encode AHP history: {}", e),
        )
    })
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
