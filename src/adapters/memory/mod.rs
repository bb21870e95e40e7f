//! In-memory adapters.
//!
//! Used by the binary when no database is configured, and by the HTTP
//! integration tests. Data lives for the lifetime of the process.

mod history_repository;
mod request_reader;

pub use history_repository::InMemoryHistoryRepository;
pub use request_reader::InMemoryRequestReader;
