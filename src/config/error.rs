//! Configuration error types

use thiserror::Error;

/// Failure to read configuration or to accept what was read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// Semantic problems found by `AppConfig::validate`
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Cannot bind to '{0}'")]
    InvalidBindAddress(String),

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Criterion importance for {0} must be a positive number")]
    InvalidCriterionImportance(&'static str),

    #[error("Saaty scale ceiling must be a finite number above 1")]
    InvalidSaatyCeiling,
}
