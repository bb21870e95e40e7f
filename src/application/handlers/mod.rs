//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    // Commands
    CreateHistoryCommand, CreateHistoryHandler, CreateHistoryResult,
    DeleteHistoryCommand, DeleteHistoryHandler,
    // Queries
    GetHistoryHandler, GetHistoryQuery, HistoryDetail,
    HistoryPage, ListHistoryHandler, ListHistoryQuery,
    AhpScore, RankRequestsHandler, RankRequestsQuery, RankedRequest, RankedRequests,
};
