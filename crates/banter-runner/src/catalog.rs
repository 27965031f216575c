//! Scenario catalog: named analyses mapped to chain directories
//!
//! The catalog is loaded from YAML once at startup and treated as
//! immutable thereafter. BaNTER scenarios are discovered from it by
//! pairing `GSM_FgEoR_<level>` keys with their `GSM_FgOnly_<level>`
//! counterparts.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use banter_evidence::perturbation::{PerturbationLevel, Sign, sort_by_magnitude};

use crate::error::{Error, Result};

/// Key prefix for signal-plus-foreground model entries
pub const FGEOR_PREFIX: &str = "GSM_FgEoR_";

/// Key prefix for foreground-only model entries
pub const FGONLY_PREFIX: &str = "GSM_FgOnly_";

/// Catalog shipped with the crate, covering the v4d0/v5d0 beam runs.
const DEFAULT_CATALOG_YAML: &str = include_str!("../config/paths.yaml");

/// Immutable mapping from analysis name to chain directory, relative to
/// the chains root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioCatalog {
    paths: BTreeMap<String, String>,
}

impl ScenarioCatalog {
    /// The built-in default catalog.
    #[must_use]
    pub fn builtin() -> Self {
        // The embedded file is static and parsed by the tests below.
        let paths: BTreeMap<String, String> =
            serde_yaml::from_str(DEFAULT_CATALOG_YAML).expect("built-in catalog is valid YAML");
        Self { paths }
    }

    /// Load from the given YAML file, or the built-in default when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when an explicitly given path does not
    /// exist; YAML parse failures propagate.
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        match custom {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Load from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the path does not exist; I/O and YAML
    /// parse failures propagate.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        let paths: BTreeMap<String, String> = serde_yaml::from_str(&text)?;
        Ok(Self { paths })
    }

    /// Build from an existing mapping.
    #[must_use]
    pub fn from_map(paths: BTreeMap<String, String>) -> Self {
        Self { paths }
    }

    /// Chain directory for an analysis name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths
            .iter()
            .map(|(name, dir)| (name.as_str(), dir.as_str()))
    }

    /// All perturbation levels with a complete FgEoR/FgOnly pair,
    /// partitioned by sign and sorted ascending by magnitude.
    #[must_use]
    pub fn available_perturbations(&self) -> PerturbationSet {
        let mut negative = Vec::new();
        let mut positive = Vec::new();

        for key in self.paths.keys() {
            let Some(level) = key.strip_prefix(FGEOR_PREFIX) else {
                continue;
            };
            if !self.paths.contains_key(&format!("{FGONLY_PREFIX}{level}")) {
                continue;
            }
            match PerturbationLevel::parse(level) {
                Some(parsed) if parsed.sign == Sign::Negative => negative.push(parsed),
                Some(parsed) => positive.push(parsed),
                None => {}
            }
        }

        sort_by_magnitude(&mut negative);
        sort_by_magnitude(&mut positive);
        PerturbationSet { negative, positive }
    }

    /// The FgEoR and FgOnly chain directories for a perturbation level.
    ///
    /// # Errors
    ///
    /// Returns `UnknownScenario` when either half of the pair is absent.
    pub fn model_pair_dirs(&self, level: &str) -> Result<(String, String)> {
        let fgeor = self.get(&format!("{FGEOR_PREFIX}{level}"));
        let fgonly = self.get(&format!("{FGONLY_PREFIX}{level}"));
        match (fgeor, fgonly) {
            (Some(fgeor), Some(fgonly)) => Ok((fgeor.to_string(), fgonly.to_string())),
            _ => Err(Error::UnknownScenario {
                level: level.to_string(),
            }),
        }
    }
}

/// Perturbation levels partitioned by sign, each sorted by magnitude.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerturbationSet {
    /// Narrowed-FWHM levels
    pub negative: Vec<PerturbationLevel>,
    /// Widened-FWHM levels
    pub positive: Vec<PerturbationLevel>,
}

impl PerturbationSet {
    /// All levels, negatives first then positives.
    #[must_use]
    pub fn all(&self) -> Vec<PerturbationLevel> {
        self.negative
            .iter()
            .chain(self.positive.iter())
            .cloned()
            .collect()
    }

    /// Labels of all levels, negatives first then positives.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.all().into_iter().map(|level| level.label).collect()
    }
}
