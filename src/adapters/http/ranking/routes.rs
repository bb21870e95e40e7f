//! HTTP routes for ranking endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_history, delete_history, get_history, list_histories, list_requests, RankingHandlers,
};

/// Creates the ranking router with all endpoints.
pub fn ranking_routes(handlers: RankingHandlers) -> Router {
    Router::new()
        .route("/api/ahp-histories", post(create_history).get(list_histories))
        .route("/api/ahp-histories/:id", get(get_history).delete(delete_history))
        .route("/api/requests", get(list_requests))
        .with_state(handlers)
}
