//! RankRequestsHandler - Query handler for the live request listing.
//!
//! Without AHP the listing is returned in reader order. With AHP every
//! request gets a `{raw, percent}` score and the listing is re-ordered by it.
//! Nothing is persisted.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::ahp::{RankingObserver, RankingPipeline, RankingPolicy, ScoreRange};
use crate::domain::foundation::Percentage;
use crate::domain::history::HistoryError;
use crate::domain::request::{parse_assessments, Alternative, RequestDetail};
use crate::ports::RequestReader;

/// Query for the request listing.
#[derive(Debug, Clone, Default)]
pub struct RankRequestsQuery {
    pub use_ahp: bool,
    /// JSON array of `{id, event_name, complexity}`.
    pub complexity_json: Option<String>,
}

/// AHP score attached to one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AhpScore {
    pub raw: f64,
    pub percent: Percentage,
}

#[derive(Debug, Clone)]
pub struct RankedRequest {
    pub request: RequestDetail,
    pub score: Option<AhpScore>,
}

#[derive(Debug, Clone)]
pub struct RankedRequests {
    pub items: Vec<RankedRequest>,
    pub count: usize,
    /// Min/max final score, when AHP ran on a non-empty listing.
    pub score_range: Option<ScoreRange>,
}

/// Handler for the live listing.
pub struct RankRequestsHandler {
    requests: Arc<dyn RequestReader>,
    policy: Arc<RankingPolicy>,
    observer: Arc<dyn RankingObserver>,
}

impl RankRequestsHandler {
    pub fn new(
        requests: Arc<dyn RequestReader>,
        policy: Arc<RankingPolicy>,
        observer: Arc<dyn RankingObserver>,
    ) -> Self {
        Self {
            requests,
            policy,
            observer,
        }
    }

    pub async fn handle(&self, query: RankRequestsQuery) -> Result<RankedRequests, HistoryError> {
        let requests = self.requests.list_active().await?;
        let count = requests.len();

        if !query.use_ahp {
            return Ok(RankedRequests {
                items: requests
                    .into_iter()
                    .map(|request| RankedRequest {
                        request,
                        score: None,
                    })
                    .collect(),
                count,
                score_range: None,
            });
        }

        let assessments = query
            .complexity_json
            .as_deref()
            .map(parse_assessments)
            .unwrap_or_default();
        debug!(assessed = assessments.len(), requests = count, "Ranking live listing");

        let alternatives: Vec<Alternative> = requests
            .iter()
            .map(|request| {
                let alternative = request.to_alternative();
                match assessments.get(&request.id) {
                    Some(rating) => alternative.with_complexity(*rating),
                    None => alternative,
                }
            })
            .collect();

        let ranked =
            RankingPipeline::new(&self.policy, self.observer.as_ref()).rank_by_scores(&alternatives);

        let mut items: Vec<RankedRequest> = requests
            .into_iter()
            .map(|request| {
                let score = ranked.ranking.find(request.id).map(|entry| AhpScore {
                    raw: entry.score,
                    percent: entry.percent,
                });
                RankedRequest { request, score }
            })
            .collect();
        items.sort_by(|a, b| raw_score(b).total_cmp(&raw_score(a)));

        Ok(RankedRequests {
            items,
            count,
            score_range: ranked.ranking.score_range(),
        })
    }
}

fn raw_score(item: &RankedRequest) -> f64 {
    item.score.map(|s| s.raw).unwrap_or(0.0)
}
