//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST endpoints
//! - `memory` - In-process stores for tests and database-less runs
//! - `observability` - Tracing subscriber and ranking observer
//! - `postgres` - PostgreSQL-backed stores

pub mod http;
pub mod memory;
pub mod observability;
pub mod postgres;

pub use memory::{InMemoryHistoryRepository, InMemoryRequestReader};
pub use observability::TracingRankingObserver;
pub use postgres::{PostgresHistoryRepository, PostgresRequestReader};
