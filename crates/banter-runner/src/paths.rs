//! Managed directory layout for analysis runs
//!
//! All locations derive from an explicitly injected base directory; there
//! are no process-wide defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};

/// Names accepted by [`PathManager::path`]
pub const PATH_NAMES: &[&str] = &["base_dir", "chains_dir", "data_dir", "results_dir"];

/// Resolves and creates the directory layout used by analysis runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathManager {
    base_dir: PathBuf,
    chains_dir: PathBuf,
    data_dir: PathBuf,
    results_dir: PathBuf,
}

impl PathManager {
    /// Create a manager rooted at `base_dir`.
    ///
    /// The default `chains/`, `data/` and `results/` subdirectories are
    /// created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error when a directory cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let chains_dir = base_dir.join("chains");
        let data_dir = base_dir.join("data");
        let results_dir = base_dir.join("results");
        for dir in [&chains_dir, &data_dir, &results_dir] {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            base_dir,
            chains_dir,
            data_dir,
            results_dir,
        })
    }

    /// Replace the chains directory (not created; assumed to exist).
    #[must_use]
    pub fn with_chains_dir(mut self, chains_dir: impl Into<PathBuf>) -> Self {
        self.chains_dir = chains_dir.into();
        self
    }

    /// Replace the data directory (not created; assumed to exist).
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Replace the results directory (not created; assumed to exist).
    #[must_use]
    pub fn with_results_dir(mut self, results_dir: impl Into<PathBuf>) -> Self {
        self.results_dir = results_dir.into();
        self
    }

    /// Base directory of the run.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding sampler chains.
    #[must_use]
    pub fn chains_dir(&self) -> &Path {
        &self.chains_dir
    }

    /// Directory holding input data.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory for result artifacts.
    #[must_use]
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// All managed paths keyed by name.
    #[must_use]
    pub fn paths(&self) -> BTreeMap<&'static str, &Path> {
        BTreeMap::from([
            ("base_dir", self.base_dir.as_path()),
            ("chains_dir", self.chains_dir.as_path()),
            ("data_dir", self.data_dir.as_path()),
            ("results_dir", self.results_dir.as_path()),
        ])
    }

    /// Look up a managed path by name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPath` (listing the valid names) for any other name.
    pub fn path(&self, name: &str) -> Result<&Path> {
        match name {
            "base_dir" => Ok(&self.base_dir),
            "chains_dir" => Ok(&self.chains_dir),
            "data_dir" => Ok(&self.data_dir),
            "results_dir" => Ok(&self.results_dir),
            _ => Err(Error::UnknownPath {
                name: name.to_string(),
                valid: PATH_NAMES.join(", "),
            }),
        }
    }

    /// Create and return a subdirectory of a managed directory.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPath` for an invalid parent name, or an I/O error
    /// when creation fails.
    pub fn create_subdir(&self, parent: &str, name: &str) -> Result<PathBuf> {
        let subdir = self.path(parent)?.join(name);
        fs::create_dir_all(&subdir)?;
        Ok(subdir)
    }
}

impl std::fmt::Display for PathManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PathManager:")?;
        for (name, path) in self.paths() {
            writeln!(f, "  {name}: {}", path.display())?;
        }
        Ok(())
    }
}

/// Timestamp string for naming result files and directories,
/// `YYYY-MM-DD_HHMMSS` in local time.
#[must_use]
pub fn make_timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_default_subdirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = PathManager::new(dir.path()).expect("manager");

        assert!(manager.chains_dir().is_dir());
        assert!(manager.data_dir().is_dir());
        assert!(manager.results_dir().is_dir());
        assert_eq!(manager.base_dir(), dir.path());
    }

    #[test]
    fn test_path_lookup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = PathManager::new(dir.path()).expect("manager");

        for name in PATH_NAMES {
            assert!(manager.path(name).is_ok(), "{name} should resolve");
        }
        assert_eq!(
            manager.path("chains_dir").expect("chains"),
            dir.path().join("chains")
        );
    }

    #[test]
    fn test_path_lookup_unknown_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = PathManager::new(dir.path()).expect("manager");

        let err = manager.path("incorrect_name").expect_err("unknown");
        assert!(err.to_string().contains("incorrect_name"));
        assert!(err.to_string().contains("results_dir"));
    }

    #[test]
    fn test_with_chains_dir_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let external = dir.path().join("external-chains");
        let manager = PathManager::new(dir.path())
            .expect("manager")
            .with_chains_dir(&external);

        assert_eq!(manager.chains_dir(), external);
        // Overrides are resolved, not created.
        assert!(!external.exists());
    }

    #[test]
    fn test_create_subdir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = PathManager::new(dir.path()).expect("manager");

        let subdir = manager
            .create_subdir("results_dir", "run_2026-01-01_120000")
            .expect("subdir");
        assert!(subdir.is_dir());
        assert!(subdir.starts_with(manager.results_dir()));

        assert!(manager.create_subdir("nope", "x").is_err());
    }

    #[test]
    fn test_paths_map_is_complete() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = PathManager::new(dir.path()).expect("manager");

        let paths = manager.paths();
        assert_eq!(paths.len(), PATH_NAMES.len());
        for name in PATH_NAMES {
            assert!(paths.contains_key(name));
        }
    }

    #[test]
    fn test_make_timestamp_format() {
        let timestamp = make_timestamp();
        // YYYY-MM-DD_HHMMSS
        assert_eq!(timestamp.len(), 17);
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[7..8], "-");
        assert_eq!(&timestamp[10..11], "_");
        assert!(timestamp[11..].chars().all(|c| c.is_ascii_digit()));
    }
}
