//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresHistoryRepository` - `ahp_history` table, append-only with soft delete
//! - `PostgresRequestReader` - Read-only joins over the request-tracking tables

mod history_repository;
mod request_reader;

pub use history_repository::PostgresHistoryRepository;
pub use request_reader::PostgresRequestReader;
