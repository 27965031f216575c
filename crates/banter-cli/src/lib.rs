//! BaNTER CLI Library
//!
//! Library functions backing the `banter-qa` binary. Each command is a
//! testable function; `main.rs` only parses arguments and dispatches.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::struct_excessive_bools)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use std::fs;
use std::path::{Path, PathBuf};

use banter_evidence::{EvidenceComparison, ModelPair, MultiNestReader, compare_models};
use banter_report::{
    RunMetadata, export_json, generate_markdown_report, render_detailed_results,
    render_summary_table,
};
use banter_runner::{
    BatchConfig, BatchOutcome, BatchRunner, MockRenderer, PathManager, ScenarioCatalog,
    SignFilter, ValidationOptions,
};

/// Configuration for a `validate` run.
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    /// Explicit perturbation labels; discovered from the catalog when empty
    pub perturbations: Vec<String>,
    /// Custom paths file; the built-in catalog when absent
    pub paths_file: Option<PathBuf>,
    /// Base directory for the managed layout
    pub base_dir: PathBuf,
    /// Chains directory override
    pub chains_dir: Option<PathBuf>,
    /// Subset selection when discovering levels
    pub filter: SignFilter,
    /// Run scenarios across a thread pool
    pub parallel: bool,
    /// Worker threads for parallel runs
    pub workers: usize,
    /// Print the per-scenario evidence breakdown
    pub detailed: bool,
    /// Suppress per-scenario progress output
    pub quiet: bool,
    /// Prefer the importance-sampling evidence estimate
    pub importance_sampling: bool,
    /// Write a JSON report here (relative paths land in results_dir)
    pub json_out: Option<PathBuf>,
    /// Write a markdown report here (relative paths land in results_dir)
    pub markdown_out: Option<PathBuf>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            perturbations: Vec::new(),
            paths_file: None,
            base_dir: PathBuf::from("."),
            chains_dir: None,
            filter: SignFilter::All,
            parallel: false,
            workers: num_workers_default(),
            detailed: false,
            quiet: false,
            importance_sampling: false,
            json_out: None,
            markdown_out: None,
        }
    }
}

/// Default worker count for parallel validation.
#[must_use]
pub fn num_workers_default() -> usize {
    BatchConfig::default().num_workers
}

/// Run a validation batch and render its reports.
///
/// The summary table is always printed; JSON/markdown reports are written
/// when requested. Returns the outcome so callers can set an exit code.
///
/// # Errors
///
/// Returns a message for structural failures: catalog loading, directory
/// creation, or report writing. Per-scenario failures are contained in the
/// outcome instead.
pub fn execute_validation(config: &ValidateConfig) -> Result<BatchOutcome, String> {
    let catalog = ScenarioCatalog::load(config.paths_file.as_deref())
        .map_err(|source| format!("error loading paths: {source}"))?;

    let mut manager = PathManager::new(&config.base_dir)
        .map_err(|source| format!("error preparing directories: {source}"))?;
    if let Some(chains_dir) = &config.chains_dir {
        manager = manager.with_chains_dir(chains_dir);
    }

    let reader = chain_reader(config.importance_sampling);
    let renderer = MockRenderer::new();
    let runner = BatchRunner::new(&catalog, manager.chains_dir(), &reader, &renderer);

    let batch_config = BatchConfig {
        perturbations: config.perturbations.clone(),
        filter: config.filter,
        options: ValidationOptions {
            verbose: !config.quiet,
            ..ValidationOptions::default()
        },
        parallel: config.parallel,
        num_workers: config.workers,
    };

    let outcome = runner.run(&batch_config);

    println!("\n{}", render_summary_table(&outcome));
    if config.detailed {
        println!("{}", render_detailed_results(&outcome));
    }

    let meta = RunMetadata::collect();
    if let Some(json_out) = &config.json_out {
        let rendered = export_json(&outcome, &meta)
            .map_err(|source| format!("error exporting JSON: {source}"))?;
        write_report(&manager, json_out, &rendered)?;
    }
    if let Some(markdown_out) = &config.markdown_out {
        let rendered = generate_markdown_report(&outcome, &meta);
        write_report(&manager, markdown_out, &rendered)?;
    }

    Ok(outcome)
}

/// Run a single pairwise comparison between two chain roots.
///
/// Read failures are contained in the returned comparison; the summary
/// lines mirror the batch output.
#[must_use]
pub fn execute_comparison(
    chain_1: &Path,
    chain_2: &Path,
    name_1: &str,
    name_2: &str,
    importance_sampling: bool,
    quiet: bool,
) -> EvidenceComparison {
    let reader = chain_reader(importance_sampling);
    let pair = ModelPair::new(chain_1, chain_2).with_names(name_1, name_2);
    let comparison = compare_models(&reader, &pair, !quiet);

    println!("\nResults:");
    println!("Success: {}", comparison.succeeded());
    if let Some(log_bf) = comparison.log_bayes_factor() {
        println!("Log Bayes Factor: {log_bf:.6}");
        if let Some(interpretation) = comparison.interpretation() {
            println!("Interpretation: {interpretation}");
        }
    } else if let Some(error) = comparison.error() {
        println!("Error: {error}");
    }

    comparison
}

/// List the perturbation levels discoverable from the catalog.
///
/// # Errors
///
/// Returns a message when the catalog cannot be loaded.
pub fn list_scenarios(paths_file: Option<&Path>) -> Result<String, String> {
    let catalog = ScenarioCatalog::load(paths_file)
        .map_err(|source| format!("error loading paths: {source}"))?;
    let set = catalog.available_perturbations();

    let mut out = String::new();
    out.push_str(&format!(
        "Available perturbation levels ({} pairs):\n",
        set.negative.len() + set.positive.len()
    ));
    out.push_str("  negative:");
    for level in &set.negative {
        out.push_str(&format!(" {level}"));
    }
    out.push_str("\n  positive:");
    for level in &set.positive {
        out.push_str(&format!(" {level}"));
    }
    out.push('\n');
    Ok(out)
}

/// Resolve and describe the managed directory layout for a base dir.
///
/// # Errors
///
/// Returns a message when directory creation fails.
pub fn show_paths(base_dir: &Path, chains_dir: Option<&Path>) -> Result<String, String> {
    let mut manager = PathManager::new(base_dir)
        .map_err(|source| format!("error preparing directories: {source}"))?;
    if let Some(chains_dir) = chains_dir {
        manager = manager.with_chains_dir(chains_dir);
    }
    Ok(manager.to_string())
}

fn chain_reader(importance_sampling: bool) -> MultiNestReader {
    if importance_sampling {
        MultiNestReader::new().with_importance_sampling()
    } else {
        MultiNestReader::new()
    }
}

/// Write a rendered report, placing relative paths under results_dir.
fn write_report(manager: &PathManager, out: &Path, rendered: &str) -> Result<(), String> {
    let target = if out.is_absolute() {
        out.to_path_buf()
    } else {
        manager.results_dir().join(out)
    };
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| format!("error creating {}: {source}", parent.display()))?;
    }
    fs::write(&target, rendered)
        .map_err(|source| format!("error writing {}: {source}", target.display()))?;
    println!("Report written to {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidateConfig::default();
        assert!(config.perturbations.is_empty());
        assert_eq!(config.filter, SignFilter::All);
        assert!(!config.parallel);
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_validation_with_missing_paths_file() {
        let config = ValidateConfig {
            paths_file: Some(PathBuf::from("/no/such/paths.yaml")),
            ..ValidateConfig::default()
        };
        let err = execute_validation(&config).expect_err("should fail");
        assert!(err.contains("paths file not found"));
    }

    #[test]
    fn test_list_scenarios_builtin() {
        let listing = list_scenarios(None).expect("listing");
        assert!(listing.contains("negative:"));
        assert!(listing.contains("-1e-3pp"));
        assert!(listing.contains("+1e1pp"));
        assert!(listing.contains("12 pairs"));
    }

    #[test]
    fn test_show_paths_creates_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let description = show_paths(dir.path(), None).expect("paths");
        assert!(description.contains("chains_dir"));
        assert!(dir.path().join("results").is_dir());
    }

    #[test]
    fn test_comparison_with_missing_chains() {
        let comparison = execute_comparison(
            Path::new("/no/such/data-"),
            Path::new("/no/such/either-"),
            "FgEoR",
            "FgOnly",
            false,
            true,
        );
        assert!(!comparison.succeeded());
        assert!(comparison.error().is_some());
    }
}
