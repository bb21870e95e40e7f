//! HTTP DTOs for ranking endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::ranking::{
    HistoryDetail, HistoryPage, RankedRequest, RankedRequests,
};
use crate::domain::ahp::{Comparison, ComparisonInput, Criterion, ScoreRange};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::history::{AlternativeSummary, CriteriaSummary, GlobalPriorityEntry};
use crate::domain::request::{EventType, RequestStatus, Requester};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/ahp-histories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistoryRequest {
    pub criteria: Vec<String>,
    pub criteria_comparison: Vec<Comparison>,
    pub alternatives: Vec<String>,
    /// Keyed by criterion label.
    pub alternative_comparison: BTreeMap<String, Vec<Comparison>>,
    pub reference_request: i64,
}

impl CreateHistoryRequest {
    /// Resolves criterion labels. Comparison labels are left for the
    /// matrix builder to match.
    pub fn to_input(&self) -> Result<ComparisonInput, ValidationError> {
        let criteria = self
            .criteria
            .iter()
            .map(|label| label.parse::<Criterion>())
            .collect::<Result<Vec<_>, _>>()?;

        let alternative_comparisons = self
            .alternative_comparison
            .iter()
            .map(|(label, comparisons)| {
                let criterion = label.parse::<Criterion>().map_err(|_| {
                    ValidationError::invalid_format(
                        "alternative_comparison",
                        format!("unknown criterion '{}'", label),
                    )
                })?;
                Ok((criterion, comparisons.clone()))
            })
            .collect::<Result<BTreeMap<_, _>, ValidationError>>()?;

        Ok(ComparisonInput {
            criteria,
            criteria_comparisons: self.criteria_comparison.clone(),
            alternatives: self.alternatives.clone(),
            alternative_comparisons,
        })
    }
}

/// Query parameters for listing histories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListHistoriesQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Query parameters for the live request listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRequestsQuery {
    /// AHP ranking is applied only when this is `yes`.
    #[serde(default)]
    pub use_ahp: Option<String>,
    /// JSON array of complexity assessments.
    #[serde(default)]
    pub event_complexity: Option<String>,
}

impl ListRequestsQuery {
    pub fn use_ahp(&self) -> bool {
        self.use_ahp
            .as_deref()
            .map(|v| v.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for history command operations.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryCommandResponse {
    pub id: i64,
    pub message: String,
}

/// Response for a newly created history record.
#[derive(Debug, Clone, Serialize)]
pub struct CreateHistoryResponse {
    pub id: i64,
    pub global_priority: Vec<GlobalPriorityEntry>,
    pub unmatched_comparisons: usize,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceSummaryResponse {
    pub id: i64,
    pub requester: String,
    pub event_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceDetailResponse {
    pub id: i64,
    pub requester: String,
    pub event_name: String,
    pub description: String,
}

/// Full view of one stored computation.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryDetailResponse {
    pub id: i64,
    pub criteria_summary: CriteriaSummary,
    pub alternative_summary: Vec<AlternativeSummary>,
    pub global_priority: Vec<GlobalPriorityEntry>,
    pub reference_request: ReferenceDetailResponse,
    pub created_at: String,
}

impl From<HistoryDetail> for HistoryDetailResponse {
    fn from(detail: HistoryDetail) -> Self {
        let HistoryDetail { record, reference } = detail;
        Self {
            id: record.id().value(),
            criteria_summary: record.criteria_summary(),
            alternative_summary: record.alternative_summaries(),
            global_priority: record.global_priority(),
            reference_request: ReferenceDetailResponse {
                id: reference.id.value(),
                requester: reference.requester.name,
                event_name: reference.event_name,
                description: reference.description,
            },
            created_at: record.created_at().to_rfc3339_z(),
        }
    }
}

/// Listing view of one stored computation.
#[derive(Debug, Clone, Serialize)]
pub struct HistorySummaryResponse {
    pub id: i64,
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub global_priority: Vec<GlobalPriorityEntry>,
    pub reference_request: ReferenceSummaryResponse,
    pub created_at: String,
}

impl From<HistoryDetail> for HistorySummaryResponse {
    fn from(detail: HistoryDetail) -> Self {
        let HistoryDetail { record, reference } = detail;
        Self {
            id: record.id().value(),
            criteria: record.criteria().iter().map(|c| c.label().to_string()).collect(),
            alternatives: record.alternatives().to_vec(),
            global_priority: record.global_priority(),
            reference_request: ReferenceSummaryResponse {
                id: reference.id.value(),
                requester: reference.requester.name,
                event_name: reference.event_name,
            },
            created_at: record.created_at().to_rfc3339_z(),
        }
    }
}

/// Paginated list of histories.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryListResponse {
    pub items: Vec<HistorySummaryResponse>,
    pub count: u64,
}

impl From<HistoryPage> for HistoryListResponse {
    fn from(page: HistoryPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            count: page.total,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AhpScoreResponse {
    pub raw: f64,
    /// Two decimals with a trailing `%`.
    pub percent: String,
}

/// One request in the live listing.
#[derive(Debug, Clone, Serialize)]
pub struct RequestResponse {
    pub id: i64,
    pub requester: Requester,
    pub event_name: String,
    pub event_location: String,
    pub event_date_start: String,
    pub event_date_end: String,
    pub description: String,
    pub event_type: EventType,
    pub status: RequestStatus,
    pub count_participant: u32,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ahp_score: Option<AhpScoreResponse>,
}

impl From<RankedRequest> for RequestResponse {
    fn from(item: RankedRequest) -> Self {
        let RankedRequest { request, score } = item;
        Self {
            id: request.id.value(),
            requester: request.requester,
            event_name: request.event_name,
            event_location: request.event_location,
            event_date_start: request.event_start.to_rfc3339_z(),
            event_date_end: request.event_end.to_rfc3339_z(),
            description: request.description,
            event_type: request.event_type,
            status: request.status,
            count_participant: request.participants,
            created_at: request.created_at.to_rfc3339_z(),
            ahp_score: score.map(|s| AhpScoreResponse {
                raw: s.raw,
                percent: s.percent.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestListResponse {
    pub items: Vec<RequestResponse>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_range: Option<ScoreRange>,
}

impl From<RankedRequests> for RequestListResponse {
    fn from(ranked: RankedRequests) -> Self {
        Self {
            items: ranked.items.into_iter().map(Into::into).collect(),
            count: ranked.count,
            score_range: ranked.score_range,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.details = Some(serde_json::json!({ "field": field }));
        self
    }
}
