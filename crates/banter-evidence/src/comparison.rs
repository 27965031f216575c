//! Pairwise evidence comparison between two model chains
//!
//! Reader failures are contained at this boundary and surfaced as data; the
//! comparison itself never returns an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chain::ChainReader;
use crate::interpret::{Interpretation, interpret_log_bayes_factor};

/// A pair of models to compare, identified by chain root and display name.
///
/// Model 1 is the numerator of the Bayes factor, model 2 the denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPair {
    /// Chain root of model 1
    pub chain_1: PathBuf,
    /// Chain root of model 2
    pub chain_2: PathBuf,
    /// Display name of model 1
    pub name_1: String,
    /// Display name of model 2
    pub name_2: String,
}

impl ModelPair {
    /// Create a pair with default display names
    #[must_use]
    pub fn new(chain_1: impl Into<PathBuf>, chain_2: impl Into<PathBuf>) -> Self {
        Self {
            chain_1: chain_1.into(),
            chain_2: chain_2.into(),
            name_1: "Model 1".to_string(),
            name_2: "Model 2".to_string(),
        }
    }

    /// Set display names
    #[must_use]
    pub fn with_names(mut self, name_1: impl Into<String>, name_2: impl Into<String>) -> Self {
        self.name_1 = name_1.into();
        self.name_2 = name_2.into();
        self
    }
}

/// Outcome of an evidence comparison: completed numbers or a diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ComparisonOutcome {
    /// Both chains were read successfully
    Completed {
        /// Global log-evidence of model 1
        log_evidence_1: f64,
        /// Global log-evidence of model 2
        log_evidence_2: f64,
        /// ln(Z1/Z2)
        log_bayes_factor: f64,
        /// Strength classification of the factor
        interpretation: Interpretation,
    },
    /// At least one chain read failed
    Failed {
        /// Diagnostic from the failing reader
        error: String,
    },
}

/// Result of comparing the evidences of two models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceComparison {
    /// Name of model 1 (numerator)
    pub model_1: String,
    /// Name of model 2 (denominator)
    pub model_2: String,
    /// Completed numbers or failure diagnostic
    #[serde(flatten)]
    pub outcome: ComparisonOutcome,
}

impl EvidenceComparison {
    /// True when both reads completed
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, ComparisonOutcome::Completed { .. })
    }

    /// Log-Bayes factor, when the comparison completed
    #[must_use]
    pub fn log_bayes_factor(&self) -> Option<f64> {
        match &self.outcome {
            ComparisonOutcome::Completed {
                log_bayes_factor, ..
            } => Some(*log_bayes_factor),
            ComparisonOutcome::Failed { .. } => None,
        }
    }

    /// Log-evidence of model 1, when the comparison completed
    #[must_use]
    pub fn log_evidence_1(&self) -> Option<f64> {
        match &self.outcome {
            ComparisonOutcome::Completed { log_evidence_1, .. } => Some(*log_evidence_1),
            ComparisonOutcome::Failed { .. } => None,
        }
    }

    /// Log-evidence of model 2, when the comparison completed
    #[must_use]
    pub fn log_evidence_2(&self) -> Option<f64> {
        match &self.outcome {
            ComparisonOutcome::Completed { log_evidence_2, .. } => Some(*log_evidence_2),
            ComparisonOutcome::Failed { .. } => None,
        }
    }

    /// Strength classification, when the comparison completed
    #[must_use]
    pub fn interpretation(&self) -> Option<Interpretation> {
        match &self.outcome {
            ComparisonOutcome::Completed { interpretation, .. } => Some(*interpretation),
            ComparisonOutcome::Failed { .. } => None,
        }
    }

    /// Failure diagnostic, when a read failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ComparisonOutcome::Completed { .. } => None,
            ComparisonOutcome::Failed { error } => Some(error),
        }
    }
}

/// Compare the evidences of two models via the given chain reader.
///
/// Either read failing short-circuits to a `Failed` outcome carrying the
/// reader's diagnostic; this function never returns an error and never
/// panics. When `verbose`, progress and result lines are printed to stdout
/// (informational only).
#[must_use]
pub fn compare_models(
    reader: &dyn ChainReader,
    pair: &ModelPair,
    verbose: bool,
) -> EvidenceComparison {
    let log_evidence_1 = match read_one(reader, &pair.chain_1, &pair.name_1, verbose) {
        Ok(evidence) => evidence,
        Err(error) => return failed(pair, error, verbose),
    };
    let log_evidence_2 = match read_one(reader, &pair.chain_2, &pair.name_2, verbose) {
        Ok(evidence) => evidence,
        Err(error) => return failed(pair, error, verbose),
    };

    let log_bayes_factor = log_evidence_1 - log_evidence_2;
    let interpretation = interpret_log_bayes_factor(log_bayes_factor);

    if verbose {
        println!(
            "Log Bayes Factor (ln({}/{})): {log_bayes_factor:.6}",
            pair.name_1, pair.name_2
        );
        println!("Interpretation: {interpretation}");
    }

    EvidenceComparison {
        model_1: pair.name_1.clone(),
        model_2: pair.name_2.clone(),
        outcome: ComparisonOutcome::Completed {
            log_evidence_1,
            log_evidence_2,
            log_bayes_factor,
            interpretation,
        },
    }
}

fn read_one(
    reader: &dyn ChainReader,
    chain: &Path,
    name: &str,
    verbose: bool,
) -> std::result::Result<f64, String> {
    if verbose {
        println!("Loading {name} chain from: {}", chain.display());
    }
    match reader.read_evidence(chain) {
        Ok(evidence) => {
            if verbose {
                println!("{name} log evidence: {evidence:.6}");
            }
            Ok(evidence)
        }
        Err(source) => Err(format!("error calculating Bayes factor: {source}")),
    }
}

fn failed(pair: &ModelPair, error: String, verbose: bool) -> EvidenceComparison {
    if verbose {
        println!("{error}");
    }
    EvidenceComparison {
        model_1: pair.name_1.clone(),
        model_2: pair.name_2.clone(),
        outcome: ComparisonOutcome::Failed { error },
    }
}
