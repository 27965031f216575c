//! Run metadata for reproducibility
//!
//! Reports carry when and where a validation batch ran.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance attached to generated reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Hostname of the machine the batch ran on
    pub hostname: String,
    /// Operating system
    pub os: String,
}

impl Default for RunMetadata {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            hostname: hostname::get().map_or_else(
                |_| "unknown".to_string(),
                |h| h.to_string_lossy().to_string(),
            ),
            os: std::env::consts::OS.to_string(),
        }
    }
}

impl RunMetadata {
    /// Metadata for the current host and time.
    #[must_use]
    pub fn collect() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_populates_fields() {
        let meta = RunMetadata::collect();
        assert!(!meta.hostname.is_empty());
        assert!(!meta.os.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let meta = RunMetadata::collect();
        let json = serde_json::to_string(&meta).expect("serialize");
        let parsed: RunMetadata = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, meta);
    }
}
