//! Error types for the planner core.

use thiserror::Error;

/// Errors that can occur in planner operations.
///
/// State transitions themselves never fail; everything here comes from
/// configuration or the durable store.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
