//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HistoryRepository` - Append-only store for AHP history records
//! - `RequestReader` - Lookup and listing of building-use requests

mod history_repository;
mod request_reader;

pub use history_repository::{HistoryRepository, ListOptions};
pub use request_reader::RequestReader;
