//! History module - Stored AHP computations.
//!
//! Each comparison-driven ranking is stored once as an immutable record
//! for audit and redisplay. The only later change is a soft delete.

mod errors;
mod record;
mod row;
mod status;
mod views;

pub use errors::HistoryError;
pub use record::{HistoryDraft, HistoryRecord};
pub use row::HistoryRow;
pub use status::HistoryStatus;
pub use views::{AlternativeSummary, CriteriaSummary, GlobalPriorityEntry, LabeledWeight};

#[cfg(test)]
pub(crate) use record::fixtures;
