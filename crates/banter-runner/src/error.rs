//! Error types for banter-runner

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for banter-runner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or running scenarios
#[derive(Debug, Error)]
pub enum Error {
    /// Explicitly given paths file does not exist
    #[error("paths file not found: {path}")]
    ConfigNotFound {
        /// The missing file
        path: PathBuf,
    },

    /// Catalog YAML could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PathManager lookup with an unknown name
    #[error("unknown path name '{name}'; valid names are: {valid}")]
    UnknownPath {
        /// The requested name
        name: String,
        /// Comma-separated valid names
        valid: String,
    },

    /// Perturbation level with no complete catalog pair
    #[error("no FgEoR/FgOnly chain directory pair for perturbation '{level}'")]
    UnknownScenario {
        /// The requested perturbation label
        level: String,
    },

    /// Plot rendering failed
    #[error("plot rendering failed: {0}")]
    Render(String),

    /// Chain reading failed
    #[error("evidence error: {0}")]
    Evidence(#[from] banter_evidence::Error),
}
