//! BaNTER Validation Runner
//!
//! Loads the scenario catalog, resolves chain locations, and runs the
//! BaNTER null-test over beam-perturbation levels: on foreground-only data
//! the foreground-only model must win the evidence comparison. Per-scenario
//! failures are contained as ERROR results so a batch always completes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]

pub mod batch;
pub mod catalog;
pub mod error;
pub mod paths;
pub mod plot;
pub mod validation;

pub use batch::{
    BatchConfig, BatchOutcome, BatchRunner, BatchSummary, SignFilter, SuccessfulResult,
};
pub use catalog::{FGEOR_PREFIX, FGONLY_PREFIX, PerturbationSet, ScenarioCatalog};
pub use error::{Error, Result};
pub use paths::{PATH_NAMES, PathManager, make_timestamp};
pub use plot::{DEFAULT_EXPECTED_PS, EOR_PS, MockRenderer, NOISE_RATIO, PlotRenderer, PlotRequest};
pub use validation::{
    PerturbationReport, Validation, ValidationOptions, ValidationScenario, validate_perturbation,
};
