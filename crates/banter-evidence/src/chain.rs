//! Chain reading
//!
//! `ChainReader` abstracts how a global log-evidence is obtained from a
//! chain location; `MultiNestReader` parses the summary file MultiNest
//! writes alongside its chains.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Source of log-evidence values for nested-sampling chains.
pub trait ChainReader {
    /// Read the global log-evidence for the chain rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error on any I/O or parse failure; the message is
    /// diagnostic only.
    fn read_evidence(&self, root: &Path) -> Result<f64>;
}

/// Reads evidence from MultiNest output files.
///
/// MultiNest writes its run summary to `<root>stats.dat`, where `<root>` is
/// the file-root prefix handed to the sampler (`.../data-` in the beam
/// runs). A directory root is also accepted, in which case `stats.dat`
/// inside it is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiNestReader {
    use_importance_sampling: bool,
}

impl MultiNestReader {
    /// Create a reader using the plain nested-sampling evidence estimate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer the importance-sampling (INS) evidence estimate when present
    #[must_use]
    pub const fn with_importance_sampling(mut self) -> Self {
        self.use_importance_sampling = true;
        self
    }

    fn stats_path(root: &Path) -> PathBuf {
        if root.is_dir() {
            root.join("stats.dat")
        } else {
            // File-root prefix: "data-" + "stats.dat" = "data-stats.dat".
            let mut joined = root.as_os_str().to_os_string();
            joined.push("stats.dat");
            PathBuf::from(joined)
        }
    }
}

impl ChainReader for MultiNestReader {
    fn read_evidence(&self, root: &Path) -> Result<f64> {
        let path = Self::stats_path(root);
        let contents = std::fs::read_to_string(&path).map_err(|source| Error::ChainRead {
            path: path.clone(),
            source,
        })?;
        parse_global_log_evidence(&contents, &path, self.use_importance_sampling)
    }
}

/// Extract the global log-evidence from MultiNest `stats.dat` contents.
///
/// The summary carries two estimates:
///
/// ```text
///  Nested Sampling Global Log-Evidence           :  -22461.5750  +/-  0.2435
///  Nested Importance Sampling Global Log-Evidence:  -22460.1478  +/-  0.1038
/// ```
fn parse_global_log_evidence(contents: &str, path: &Path, importance: bool) -> Result<f64> {
    for line in contents.lines() {
        if !line.contains("Global Log-Evidence") {
            continue;
        }
        if line.contains("Importance Sampling") != importance {
            continue;
        }
        let Some((_, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(value) = rest.split_whitespace().next() else {
            continue;
        };
        return value.parse::<f64>().map_err(|_| Error::MalformedEvidence {
            path: path.to_path_buf(),
            value: value.to_string(),
        });
    }

    Err(Error::EvidenceMissing {
        path: path.to_path_buf(),
    })
}
