//! BaNTER Evidence Core
//!
//! Log-Bayes-factor computation between nested-sampling models and
//! evidence-strength classification for beam-perturbation validation.
//!
//! A comparison either completes with both log evidences, their difference
//! and a strength category, or fails with a diagnostic; it never panics and
//! never propagates a reader error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::must_use_candidate)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]

pub mod chain;
pub mod comparison;
pub mod error;
pub mod interpret;
pub mod perturbation;
pub mod proptest_impl;

pub use chain::{ChainReader, MultiNestReader};
pub use comparison::{ComparisonOutcome, EvidenceComparison, ModelPair, compare_models};
pub use error::{Error, Result};
pub use interpret::{Interpretation, interpret_log_bayes_factor};
pub use perturbation::{PerturbationLevel, Sign, sort_by_magnitude};
