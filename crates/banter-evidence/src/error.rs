//! Error types for banter-evidence

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for banter-evidence operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading chain output
#[derive(Debug, Error)]
pub enum Error {
    /// Chain stats file missing or unreadable
    #[error("failed to read chain stats {path}: {source}")]
    ChainRead {
        /// Stats file that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Stats file carries no global log-evidence line
    #[error("no global log-evidence found in {path}")]
    EvidenceMissing {
        /// Stats file that was searched
        path: PathBuf,
    },

    /// Evidence value present but not parseable as a float
    #[error("malformed evidence value '{value}' in {path}")]
    MalformedEvidence {
        /// Stats file the value came from
        path: PathBuf,
        /// The offending token
        value: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
