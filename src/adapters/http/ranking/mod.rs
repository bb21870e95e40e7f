//! HTTP adapter for AHP ranking endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AhpScoreResponse, CreateHistoryRequest, CreateHistoryResponse, ErrorResponse,
    HistoryCommandResponse, HistoryDetailResponse, HistoryListResponse, HistorySummaryResponse,
    ListHistoriesQuery, ListRequestsQuery, RequestListResponse, RequestResponse,
};
pub use handlers::RankingHandlers;
pub use routes::ranking_routes;
