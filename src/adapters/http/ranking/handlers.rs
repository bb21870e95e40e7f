//! HTTP handlers for ranking endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::ranking::{
    CreateHistoryCommand, CreateHistoryHandler, DeleteHistoryCommand, DeleteHistoryHandler,
    GetHistoryHandler, GetHistoryQuery, ListHistoryHandler, ListHistoryQuery,
    RankRequestsHandler, RankRequestsQuery, DEFAULT_PER_PAGE,
};
use crate::domain::ahp::{RankingObserver, RankingPolicy};
use crate::domain::foundation::{HistoryId, RequestId};
use crate::domain::history::HistoryError;
use crate::ports::{HistoryRepository, RequestReader};

use super::dto::{
    CreateHistoryRequest, CreateHistoryResponse, ErrorResponse, HistoryCommandResponse,
    HistoryDetailResponse, HistoryListResponse, ListHistoriesQuery, ListRequestsQuery,
    RequestListResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RankingHandlers {
    create_handler: Arc<CreateHistoryHandler>,
    get_handler: Arc<GetHistoryHandler>,
    list_handler: Arc<ListHistoryHandler>,
    delete_handler: Arc<DeleteHistoryHandler>,
    rank_handler: Arc<RankRequestsHandler>,
}

impl RankingHandlers {
    pub fn new(
        create_handler: Arc<CreateHistoryHandler>,
        get_handler: Arc<GetHistoryHandler>,
        list_handler: Arc<ListHistoryHandler>,
        delete_handler: Arc<DeleteHistoryHandler>,
        rank_handler: Arc<RankRequestsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            delete_handler,
            rank_handler,
        }
    }

    /// Wires every handler against the same ports.
    pub fn from_ports(
        history: Arc<dyn HistoryRepository>,
        requests: Arc<dyn RequestReader>,
        policy: Arc<RankingPolicy>,
        observer: Arc<dyn RankingObserver>,
    ) -> Self {
        Self::new(
            Arc::new(CreateHistoryHandler::new(
                history.clone(),
                requests.clone(),
                policy.clone(),
                observer.clone(),
            )),
            Arc::new(GetHistoryHandler::new(history.clone(), requests.clone())),
            Arc::new(ListHistoryHandler::new(history.clone(), requests.clone())),
            Arc::new(DeleteHistoryHandler::new(history)),
            Arc::new(RankRequestsHandler::new(requests, policy, observer)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/ahp-histories - Compute and store a ranking
pub async fn create_history(
    State(handlers): State<RankingHandlers>,
    Json(req): Json<CreateHistoryRequest>,
) -> Response {
    let input = match req.to_input() {
        Ok(input) => input,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string()).with_field(e.field())),
            )
                .into_response()
        }
    };

    let cmd = CreateHistoryCommand {
        input,
        reference_request: RequestId::new(req.reference_request),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response = CreateHistoryResponse {
                id: result.record.id().value(),
                global_priority: result.record.global_priority(),
                unmatched_comparisons: result.unmatched_comparisons,
                created_at: result.record.created_at().to_rfc3339_z(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_history_error(e),
    }
}

/// GET /api/ahp-histories - List stored rankings
pub async fn list_histories(
    State(handlers): State<RankingHandlers>,
    Query(params): Query<ListHistoriesQuery>,
) -> Response {
    let query = ListHistoryQuery {
        page: params.page.unwrap_or(1),
        per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
    };

    match handlers.list_handler.handle(query).await {
        Ok(page) => {
            let response: HistoryListResponse = page.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_history_error(e),
    }
}

/// GET /api/ahp-histories/:id - Get one stored ranking
pub async fn get_history(
    State(handlers): State<RankingHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_history_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetHistoryQuery { id }).await {
        Ok(detail) => {
            let response: HistoryDetailResponse = detail.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_history_error(e),
    }
}

/// DELETE /api/ahp-histories/:id - Soft-delete a stored ranking
pub async fn delete_history(
    State(handlers): State<RankingHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_history_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.delete_handler.handle(DeleteHistoryCommand { id }).await {
        Ok(()) => {
            let response = HistoryCommandResponse {
                id: id.value(),
                message: "AHP history deleted successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_history_error(e),
    }
}

/// GET /api/requests - Live request listing, optionally AHP-ranked
pub async fn list_requests(
    State(handlers): State<RankingHandlers>,
    Query(params): Query<ListRequestsQuery>,
) -> Response {
    let query = RankRequestsQuery {
        use_ahp: params.use_ahp(),
        complexity_json: params.event_complexity,
    };

    match handlers.rank_handler.handle(query).await {
        Ok(ranked) => {
            let response: RequestListResponse = ranked.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_history_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_history_id(raw: &str) -> Result<HistoryId, Response> {
    raw.parse::<i64>()
        .ok()
        .and_then(|value| HistoryId::new(value).ok())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid AHP history ID")),
            )
                .into_response()
        })
}

pub(crate) fn handle_history_error(error: HistoryError) -> Response {
    let body = ErrorResponse::new(error.code(), error.message());
    match error {
        HistoryError::NotFound(_) | HistoryError::ReferenceNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        HistoryError::ValidationFailed { ref field, .. } => {
            (StatusCode::BAD_REQUEST, Json(body.with_field(field))).into_response()
        }
        HistoryError::InvalidState(_) => (StatusCode::CONFLICT, Json(body)).into_response(),
        HistoryError::Infrastructure(ref msg) => {
            error!(error = %msg, "Ranking request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_history_error(HistoryError::not_found(HistoryId::new(3).unwrap()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = handle_history_error(HistoryError::reference_not_found(RequestId::new(9)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failed_maps_to_400() {
        let response = handle_history_error(HistoryError::validation("alternatives", "empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_state_maps_to_409() {
        let response = handle_history_error(HistoryError::invalid_state("already deleted"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_history_error(HistoryError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn history_id_must_be_positive_integer() {
        assert!(parse_history_id("12").is_ok());
        assert!(parse_history_id("0").is_err());
        assert!(parse_history_id("abc").is_err());
    }
}
