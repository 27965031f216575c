//! Posterior/power-spectrum plot rendering seam
//!
//! Figure production is delegated to an external backend; the runner only
//! needs to know whether rendering succeeded, so the seam is a trait with
//! a mock implementation for tests and plot-disabled runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fiducial EoR power-spectrum amplitude of the beam studies, mK^2 Mpc^3.
pub const EOR_PS: f64 = 214_777.660_682_163_03;

/// Ratio of the noise power spectrum to the EoR amplitude.
pub const NOISE_RATIO: f64 = 0.5;

/// Default expected power spectrum drawn on figures: the noise level.
pub const DEFAULT_EXPECTED_PS: f64 = EOR_PS * NOISE_RATIO;

/// A figure request for one or more analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    /// Chain directories relative to the chains root
    pub dirnames: Vec<String>,
    /// Display label per directory
    pub labels: Vec<String>,
    /// Horizontal reference line for the expected power spectrum
    pub expected_ps: f64,
    /// Figure title
    pub title: String,
}

impl PlotRequest {
    /// Request a figure for a single analysis directory.
    #[must_use]
    pub fn single(
        dirname: impl Into<String>,
        label: impl Into<String>,
        expected_ps: f64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            dirnames: vec![dirname.into()],
            labels: vec![label.into()],
            expected_ps,
            title: title.into(),
        }
    }
}

/// Renders posterior and power-spectrum figures.
///
/// This abstraction allows plot backends to be swapped and mocked in tests.
pub trait PlotRenderer {
    /// Render the requested figure, returning the artifact location.
    ///
    /// # Errors
    ///
    /// Returns an error on any rendering failure.
    fn render(&self, request: &PlotRequest) -> Result<PathBuf>;
}

/// Renderer with canned behavior for tests and plot-disabled runs.
#[derive(Debug, Clone, Default)]
pub struct MockRenderer {
    fail: bool,
    artifact: PathBuf,
}

impl MockRenderer {
    /// Create a mock renderer that reports success
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every render call fail
    #[must_use]
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Set the artifact path reported on success
    #[must_use]
    pub fn with_artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.artifact = artifact.into();
        self
    }
}

impl PlotRenderer for MockRenderer {
    fn render(&self, request: &PlotRequest) -> Result<PathBuf> {
        if self.fail {
            return Err(Error::Render(format!(
                "mock renderer failed for '{}'",
                request.title
            )));
        }
        Ok(self.artifact.clone())
    }
}
