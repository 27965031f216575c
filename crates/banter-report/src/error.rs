//! Error types for banter-report

use thiserror::Error;

/// Result type alias for banter-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during report generation
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
