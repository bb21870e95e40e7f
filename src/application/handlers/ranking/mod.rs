//! AHP ranking command and query handlers.

mod create_history;
mod delete_history;
mod get_history;
mod list_history;
mod rank_requests;

#[cfg(test)]
mod mocks;

pub use create_history::{CreateHistoryCommand, CreateHistoryHandler, CreateHistoryResult};
pub use delete_history::{DeleteHistoryCommand, DeleteHistoryHandler};
pub use get_history::{GetHistoryHandler, GetHistoryQuery, HistoryDetail};
pub use list_history::{
    HistoryPage, ListHistoryHandler, ListHistoryQuery, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
pub use rank_requests::{
    AhpScore, RankRequestsHandler, RankRequestsQuery, RankedRequest, RankedRequests,
};
