//! BaNTER validation of a single perturbation level
//!
//! The null test: on foreground-only data the foreground-only model must
//! win the evidence comparison, i.e. ln(Z_FgEoR / Z_FgOnly) < 0. A
//! non-negative factor means the analysis spuriously detects signal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use banter_evidence::{ChainReader, EvidenceComparison, ModelPair, compare_models};

use crate::catalog::{FGEOR_PREFIX, FGONLY_PREFIX, ScenarioCatalog};
use crate::error::Result;
use crate::plot::{EOR_PS, PlotRenderer, PlotRequest};

/// MultiNest file-root prefix inside each chain directory.
const CHAIN_FILE_ROOT: &str = "data-";

/// Validation classification for one perturbation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Validation {
    /// Foreground-only model correctly favored
    Pass,
    /// Signal model spuriously favored
    Fail,
    /// Comparison or plotting could not complete
    Error,
}

impl Validation {
    /// Uppercase label used in summaries
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A perturbation level paired with its two chain locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationScenario {
    /// Perturbation label, e.g. `-1e-3pp`
    pub perturbation: String,
    /// Display name of the signal-plus-foreground model
    pub fgeor_name: String,
    /// Chain root of the signal-plus-foreground model
    pub fgeor_chain: PathBuf,
    /// Display name of the foreground-only model
    pub fgonly_name: String,
    /// Chain root of the foreground-only model
    pub fgonly_chain: PathBuf,
    /// FgEoR chain directory relative to the chains root, for plotting
    pub fgeor_dirname: String,
}

impl ValidationScenario {
    /// Build the scenario for `level` from catalog entries.
    ///
    /// # Errors
    ///
    /// Returns `UnknownScenario` when the catalog lacks either half of the
    /// FgEoR/FgOnly pair.
    pub fn from_catalog(
        catalog: &ScenarioCatalog,
        chains_dir: &Path,
        level: &str,
    ) -> Result<Self> {
        let (fgeor_dirname, fgonly_dirname) = catalog.model_pair_dirs(level)?;
        Ok(Self {
            perturbation: level.to_string(),
            fgeor_name: format!("{FGEOR_PREFIX}{level}"),
            fgeor_chain: chain_root(chains_dir, &fgeor_dirname),
            fgonly_name: format!("{FGONLY_PREFIX}{level}"),
            fgonly_chain: chain_root(chains_dir, &fgonly_dirname),
            fgeor_dirname,
        })
    }
}

/// MultiNest file root for a chain directory under the chains root.
fn chain_root(chains_dir: &Path, dirname: &str) -> PathBuf {
    chains_dir.join(dirname).join(CHAIN_FILE_ROOT)
}

/// Options applied to each validated scenario.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Render a posterior plot before comparing evidences
    pub create_plots: bool,
    /// Expected power-spectrum reference for plots
    pub expected_ps: f64,
    /// Print progress to stdout
    pub verbose: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            create_plots: false,
            expected_ps: EOR_PS,
            verbose: true,
        }
    }
}

/// Report for one validated perturbation level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationReport {
    /// Perturbation label
    pub perturbation: String,
    /// Whether the plotting step succeeded (true when plots are disabled)
    pub plot_success: bool,
    /// Evidence comparison; absent when plotting failed first
    pub comparison: Option<EvidenceComparison>,
    /// PASS/FAIL/ERROR classification
    pub validation: Validation,
}

impl PerturbationReport {
    /// Report for a scenario that could not be resolved or plotted.
    #[must_use]
    pub fn errored(perturbation: impl Into<String>, comparison: Option<EvidenceComparison>) -> Self {
        Self {
            perturbation: perturbation.into(),
            plot_success: false,
            comparison,
            validation: Validation::Error,
        }
    }
}

/// Validate one perturbation level.
///
/// A renderer failure short-circuits to ERROR without touching the chains;
/// a chain-read failure is contained by the comparison and classified
/// ERROR. This function never returns an error, so a batch can always
/// continue past it.
#[must_use]
pub fn validate_perturbation(
    scenario: &ValidationScenario,
    reader: &dyn ChainReader,
    renderer: &dyn PlotRenderer,
    options: &ValidationOptions,
) -> PerturbationReport {
    if options.verbose {
        println!(
            "\n--- Processing perturbation: {} ---",
            scenario.perturbation
        );
    }

    if options.create_plots {
        if options.verbose {
            println!("Creating posterior plot for {}", scenario.fgeor_name);
        }
        let request = PlotRequest::single(
            scenario.fgeor_dirname.clone(),
            scenario.fgeor_name.clone(),
            options.expected_ps,
            format!("GSM FgEoR analysis - {}", scenario.perturbation),
        );
        if let Err(source) = renderer.render(&request) {
            if options.verbose {
                println!("Error creating plot for {}: {source}", scenario.fgeor_name);
            }
            return PerturbationReport::errored(scenario.perturbation.clone(), None);
        }
    }

    if options.verbose {
        println!("--- Bayes factor calculation for {} ---", scenario.perturbation);
    }

    let pair = ModelPair::new(scenario.fgeor_chain.clone(), scenario.fgonly_chain.clone())
        .with_names(scenario.fgeor_name.clone(), scenario.fgonly_name.clone());
    let comparison = compare_models(reader, &pair, options.verbose);

    let validation = match comparison.log_bayes_factor() {
        Some(log_bf) if log_bf < 0.0 => Validation::Pass,
        Some(_) => Validation::Fail,
        None => Validation::Error,
    };

    if options.verbose {
        match validation {
            Validation::Pass => println!("PASS: foreground-only model correctly favored"),
            Validation::Fail => {
                println!("FAIL: EoR signal spuriously detected in foreground-only data");
            }
            Validation::Error => {}
        }
    }

    PerturbationReport {
        perturbation: scenario.perturbation.clone(),
        plot_success: true,
        comparison: Some(comparison),
        validation,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::plot::MockRenderer;
    use banter_evidence::ComparisonOutcome;
    use banter_evidence::error::{Error as EvidenceError, Result as EvidenceResult};
    use std::collections::HashMap;

    /// Reader with fixed per-root evidences; unknown roots fail.
    pub(crate) struct FixedReader {
        evidences: HashMap<PathBuf, f64>,
    }

    impl FixedReader {
        pub(crate) fn new(entries: &[(&Path, f64)]) -> Self {
            Self {
                evidences: entries
                    .iter()
                    .map(|(path, evidence)| (path.to_path_buf(), *evidence))
                    .collect(),
            }
        }

        pub(crate) fn empty() -> Self {
            Self {
                evidences: HashMap::new(),
            }
        }
    }

    impl ChainReader for FixedReader {
        fn read_evidence(&self, root: &Path) -> EvidenceResult<f64> {
            self.evidences
                .get(root)
                .copied()
                .ok_or_else(|| EvidenceError::EvidenceMissing {
                    path: root.to_path_buf(),
                })
        }
    }

    pub(crate) fn scenario(level: &str) -> ValidationScenario {
        let catalog = test_catalog(&[level]);
        ValidationScenario::from_catalog(&catalog, Path::new("/chains"), level).expect("scenario")
    }

    pub(crate) fn test_catalog(levels: &[&str]) -> ScenarioCatalog {
        let mut paths = std::collections::BTreeMap::new();
        for level in levels {
            paths.insert(
                format!("{FGEOR_PREFIX}{level}"),
                format!("v5d0/GSM_FgEoR_{level}/MN-v1/"),
            );
            paths.insert(
                format!("{FGONLY_PREFIX}{level}"),
                format!("v5d0/GSM_FgOnly_{level}/MN-v1/"),
            );
        }
        ScenarioCatalog::from_map(paths)
    }

    fn quiet() -> ValidationOptions {
        ValidationOptions {
            verbose: false,
            ..ValidationOptions::default()
        }
    }

    #[test]
    fn test_scenario_chain_roots() {
        let scenario = scenario("-1e0pp");
        assert_eq!(scenario.fgeor_name, "GSM_FgEoR_-1e0pp");
        assert_eq!(
            scenario.fgeor_chain,
            Path::new("/chains/v5d0/GSM_FgEoR_-1e0pp/MN-v1/data-")
        );
        assert_eq!(
            scenario.fgonly_chain,
            Path::new("/chains/v5d0/GSM_FgOnly_-1e0pp/MN-v1/data-")
        );
        assert_eq!(scenario.fgeor_dirname, "v5d0/GSM_FgEoR_-1e0pp/MN-v1/");
    }

    #[test]
    fn test_pass_when_foreground_only_wins() {
        let scenario = scenario("-1e0pp");
        let reader = FixedReader::new(&[
            (scenario.fgeor_chain.as_path(), 10.0),
            (scenario.fgonly_chain.as_path(), 20.0),
        ]);

        let report =
            validate_perturbation(&scenario, &reader, &MockRenderer::new(), &quiet());

        assert_eq!(report.validation, Validation::Pass);
        assert!(report.plot_success);
        let comparison = report.comparison.expect("comparison present");
        assert_eq!(comparison.log_bayes_factor(), Some(-10.0));
    }

    #[test]
    fn test_fail_when_signal_model_wins() {
        let scenario = scenario("-1e0pp");
        let reader = FixedReader::new(&[
            (scenario.fgeor_chain.as_path(), 20.0),
            (scenario.fgonly_chain.as_path(), 10.0),
        ]);

        let report =
            validate_perturbation(&scenario, &reader, &MockRenderer::new(), &quiet());

        assert_eq!(report.validation, Validation::Fail);
        assert_eq!(
            report.comparison.expect("comparison").log_bayes_factor(),
            Some(10.0)
        );
    }

    #[test]
    fn test_zero_factor_is_fail() {
        let scenario = scenario("-1e0pp");
        let reader = FixedReader::new(&[
            (scenario.fgeor_chain.as_path(), 15.0),
            (scenario.fgonly_chain.as_path(), 15.0),
        ]);

        let report =
            validate_perturbation(&scenario, &reader, &MockRenderer::new(), &quiet());
        assert_eq!(report.validation, Validation::Fail);
    }

    #[test]
    fn test_error_when_reader_fails() {
        let scenario = scenario("-1e0pp");
        let reader = FixedReader::empty();

        let report =
            validate_perturbation(&scenario, &reader, &MockRenderer::new(), &quiet());

        assert_eq!(report.validation, Validation::Error);
        let comparison = report.comparison.expect("comparison present");
        assert!(!comparison.succeeded());
        assert!(matches!(
            comparison.outcome,
            ComparisonOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_plot_failure_short_circuits() {
        let scenario = scenario("-1e0pp");
        // Reader would pass; the renderer must fail first.
        let reader = FixedReader::new(&[
            (scenario.fgeor_chain.as_path(), 10.0),
            (scenario.fgonly_chain.as_path(), 20.0),
        ]);
        let renderer = MockRenderer::new().with_failure();
        let options = ValidationOptions {
            create_plots: true,
            verbose: false,
            ..ValidationOptions::default()
        };

        let report = validate_perturbation(&scenario, &reader, &renderer, &options);

        assert_eq!(report.validation, Validation::Error);
        assert!(!report.plot_success);
        assert!(report.comparison.is_none());
    }

    #[test]
    fn test_plot_success_proceeds_to_comparison() {
        let scenario = scenario("-1e0pp");
        let reader = FixedReader::new(&[
            (scenario.fgeor_chain.as_path(), 10.0),
            (scenario.fgonly_chain.as_path(), 20.0),
        ]);
        let options = ValidationOptions {
            create_plots: true,
            verbose: false,
            ..ValidationOptions::default()
        };

        let report =
            validate_perturbation(&scenario, &reader, &MockRenderer::new(), &options);
        assert_eq!(report.validation, Validation::Pass);
        assert!(report.plot_success);
    }

    #[test]
    fn test_validation_display() {
        assert_eq!(Validation::Pass.to_string(), "PASS");
        assert_eq!(Validation::Fail.to_string(), "FAIL");
        assert_eq!(Validation::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_validation_serializes_uppercase() {
        let json = serde_json::to_string(&Validation::Pass).expect("serialize");
        assert_eq!(json, "\"PASS\"");
    }
}
