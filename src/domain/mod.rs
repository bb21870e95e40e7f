//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ahp` - Pairwise comparison matrices, solver, score derivation and aggregation
//! - `request` - Building-use requests projected into ranking alternatives
//! - `history` - Stored AHP computations and their display views

pub mod ahp;
pub mod foundation;
pub mod history;
pub mod request;
