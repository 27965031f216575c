//! BaNTER Validation Reports
//!
//! Renders batch validation outcomes as fixed-width text summaries,
//! markdown reports, and JSON exports.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::format_push_string)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod error;
pub mod json;
pub mod markdown;
pub mod run_info;
pub mod text;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{Error, Result};
pub use json::export_json;
pub use markdown::generate_markdown_report;
pub use run_info::RunMetadata;
pub use text::{render_detailed_results, render_summary_table};
