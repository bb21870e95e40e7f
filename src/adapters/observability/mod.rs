//! Observability adapters - tracing subscriber setup and the ranking observer.

mod ranking_observer;
pub mod telemetry;

pub use ranking_observer::TracingRankingObserver;
pub use telemetry::TelemetryError;
