//! Request module - Building-use requests as seen by the ranking.
//!
//! Requests themselves are stored and edited elsewhere; this module only
//! holds the read shape and its projection into ranking alternatives.

mod alternative;
mod complexity;
mod detail;

pub use alternative::Alternative;
pub use complexity::{parse_assessments, ComplexityRating};
pub use detail::{EventType, RequestDetail, RequestStatus, Requester};

#[cfg(test)]
pub(crate) use detail::fixtures;
