//! Batch validation across perturbation levels
//!
//! Scenarios are independent, so the batch can run sequentially or across
//! a rayon pool; either way results keep input order and a failure in one
//! scenario never aborts the rest.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use banter_evidence::{ChainReader, ComparisonOutcome, EvidenceComparison, Interpretation};

use crate::catalog::{FGEOR_PREFIX, FGONLY_PREFIX, ScenarioCatalog};
use crate::plot::PlotRenderer;
use crate::validation::{
    PerturbationReport, Validation, ValidationOptions, ValidationScenario, validate_perturbation,
};

/// Which perturbation signs to include when deriving the batch from the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignFilter {
    /// Negatives then positives
    #[default]
    All,
    /// Narrowed-FWHM levels only
    NegativeOnly,
    /// Widened-FWHM levels only
    PositiveOnly,
}

/// Batch runner configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Explicit perturbation labels; derived from the catalog when empty
    pub perturbations: Vec<String>,
    /// Subset selection when deriving from the catalog
    pub filter: SignFilter,
    /// Options applied to every scenario
    pub options: ValidationOptions,
    /// Run scenarios across a rayon thread pool
    pub parallel: bool,
    /// Worker threads for parallel runs
    pub num_workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            perturbations: Vec::new(),
            filter: SignFilter::All,
            options: ValidationOptions::default(),
            parallel: false,
            num_workers: num_cpus::get().min(4),
        }
    }
}

/// Aggregate counts for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of scenarios run
    pub total: usize,
    /// Scenarios where the foreground-only model won
    pub pass: usize,
    /// Scenarios where the signal model was spuriously favored
    pub fail: usize,
    /// Scenarios that could not be compared
    pub error: usize,
}

impl BatchSummary {
    /// Tally a sequence of reports.
    #[must_use]
    pub fn from_reports(reports: &[PerturbationReport]) -> Self {
        let mut summary = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.validation {
                Validation::Pass => summary.pass += 1,
                Validation::Fail => summary.fail += 1,
                Validation::Error => summary.error += 1,
            }
        }
        summary
    }

    /// True when every scenario that could be compared passed.
    #[must_use]
    pub const fn all_valid_passed(&self) -> bool {
        self.pass == self.total - self.error
    }
}

/// Flat record for a perturbation whose comparison completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessfulResult {
    /// Perturbation label
    pub perturbation: String,
    /// Log-evidence of the signal-plus-foreground model
    pub log_evidence_fgeor: f64,
    /// Log-evidence of the foreground-only model
    pub log_evidence_fgonly: f64,
    /// ln(Z_FgEoR / Z_FgOnly)
    pub log_bayes_factor: f64,
    /// PASS or FAIL
    pub validation: Validation,
    /// Strength classification of the factor
    pub interpretation: Interpretation,
}

/// Full outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// One report per scenario, in input order
    pub reports: Vec<PerturbationReport>,
    /// PASS/FAIL/ERROR tallies
    pub summary: BatchSummary,
    /// Flat records for the scenarios whose comparison completed, in
    /// input order
    pub successful: Vec<SuccessfulResult>,
}

/// Batch runner over a scenario catalog.
pub struct BatchRunner<'a> {
    catalog: &'a ScenarioCatalog,
    chains_dir: PathBuf,
    reader: &'a (dyn ChainReader + Sync),
    renderer: &'a (dyn PlotRenderer + Sync),
}

impl<'a> BatchRunner<'a> {
    /// Create a runner for the given catalog and collaborators.
    #[must_use]
    pub fn new(
        catalog: &'a ScenarioCatalog,
        chains_dir: impl Into<PathBuf>,
        reader: &'a (dyn ChainReader + Sync),
        renderer: &'a (dyn PlotRenderer + Sync),
    ) -> Self {
        Self {
            catalog,
            chains_dir: chains_dir.into(),
            reader,
            renderer,
        }
    }

    /// The perturbation labels this batch will run, in run order.
    #[must_use]
    pub fn resolve_levels(&self, config: &BatchConfig) -> Vec<String> {
        if !config.perturbations.is_empty() {
            return config.perturbations.clone();
        }
        let set = self.catalog.available_perturbations();
        let levels = match config.filter {
            SignFilter::All => set.all(),
            SignFilter::NegativeOnly => set.negative,
            SignFilter::PositiveOnly => set.positive,
        };
        levels.into_iter().map(|level| level.label).collect()
    }

    /// Run the batch.
    ///
    /// Per-scenario failures (unresolvable level, renderer failure, chain
    /// read failure) are contained as ERROR reports; the batch itself is
    /// infallible and deterministic for fixed collaborator responses.
    #[must_use]
    pub fn run(&self, config: &BatchConfig) -> BatchOutcome {
        let levels = self.resolve_levels(config);

        if config.options.verbose {
            println!("=== Complete BaNTER validation ===");
            println!("Analyzing {} perturbation levels...", levels.len());
            println!("Perturbation levels: {levels:?}");
        }

        let reports: Vec<PerturbationReport> = if config.parallel {
            self.run_parallel(&levels, config)
        } else {
            levels
                .iter()
                .enumerate()
                .map(|(index, level)| {
                    if config.options.verbose {
                        println!("\n--- Processing {}/{}: {level} ---", index + 1, levels.len());
                    }
                    self.run_one(level, config)
                })
                .collect()
        };

        let summary = BatchSummary::from_reports(&reports);
        let successful = successful_results(&reports);
        BatchOutcome {
            reports,
            summary,
            successful,
        }
    }

    fn run_parallel(&self, levels: &[String], config: &BatchConfig) -> Vec<PerturbationReport> {
        // Keyed by input order via the order-preserving collect; a
        // scenario's position never depends on completion time.
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_workers)
            .build_global()
            .ok(); // Ignore if already configured

        levels
            .par_iter()
            .map(|level| self.run_one(level, config))
            .collect()
    }

    fn run_one(&self, level: &str, config: &BatchConfig) -> PerturbationReport {
        match ValidationScenario::from_catalog(self.catalog, &self.chains_dir, level) {
            Ok(scenario) => {
                validate_perturbation(&scenario, self.reader, self.renderer, &config.options)
            }
            Err(source) => {
                if config.options.verbose {
                    println!("Skipping {level}: {source}");
                }
                // Carry the resolution failure as comparison data so the
                // report surfaces it exactly once.
                let comparison = EvidenceComparison {
                    model_1: format!("{FGEOR_PREFIX}{level}"),
                    model_2: format!("{FGONLY_PREFIX}{level}"),
                    outcome: ComparisonOutcome::Failed {
                        error: source.to_string(),
                    },
                };
                PerturbationReport::errored(level, Some(comparison))
            }
        }
    }
}

/// Flatten the reports whose comparison completed, preserving order.
fn successful_results(reports: &[PerturbationReport]) -> Vec<SuccessfulResult> {
    reports
        .iter()
        .filter_map(|report| {
            let comparison = report.comparison.as_ref()?;
            match comparison.outcome {
                ComparisonOutcome::Completed {
                    log_evidence_1,
                    log_evidence_2,
                    log_bayes_factor,
                    interpretation,
                } => Some(SuccessfulResult {
                    perturbation: report.perturbation.clone(),
                    log_evidence_fgeor: log_evidence_1,
                    log_evidence_fgonly: log_evidence_2,
                    log_bayes_factor,
                    validation: report.validation,
                    interpretation,
                }),
                ComparisonOutcome::Failed { .. } => None,
            }
        })
        .collect()
}
