//! Request Ranker - AHP ranking for building-use requests
//!
//! Ranks event requests with the Analytic Hierarchy Process. Rankings are
//! either derived live from request attributes (urgency, importance,
//! participants, complexity) or computed from explicit pairwise comparisons
//! and stored as history records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
