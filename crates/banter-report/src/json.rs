//! JSON export of batch outcomes

use banter_runner::BatchOutcome;
use serde::Serialize;

use crate::error::Result;
use crate::run_info::RunMetadata;

/// Batch outcome with provenance, as exported.
#[derive(Debug, Serialize)]
struct Export<'a> {
    meta: &'a RunMetadata,
    #[serde(flatten)]
    outcome: &'a BatchOutcome,
}

/// Serialize a batch outcome (with run metadata) to pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_json(outcome: &BatchOutcome, meta: &RunMetadata) -> Result<String> {
    let export = Export { meta, outcome };
    Ok(serde_json::to_string_pretty(&export)?)
}
