//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Writes (create, delete) and reads (get, list, live ranking) have separate handlers.

pub mod handlers;

pub use handlers::{
    CreateHistoryCommand, CreateHistoryHandler, CreateHistoryResult,
    DeleteHistoryCommand, DeleteHistoryHandler,
    GetHistoryHandler, GetHistoryQuery, HistoryDetail,
    HistoryPage, ListHistoryHandler, ListHistoryQuery,
    RankRequestsHandler, RankRequestsQuery, RankedRequests,
};
