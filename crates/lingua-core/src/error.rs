//! Error types for simulation operations.

use thiserror::Error;

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur while constructing, querying, or exporting a
/// simulation. A failed communication is a modeled outcome, not an error,
/// and never surfaces here.
#[derive(Debug, Error)]
pub enum SimError {
    /// A construction parameter was outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A query referenced an agent id outside the population.
    #[error("unknown agent id {0}")]
    UnknownAgent(usize),

    /// The tuning file could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    /// Export I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
