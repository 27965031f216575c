//! Markdown export of batch outcomes
//!
//! Structured for archiving alongside result directories: a summary
//! section, a results table, and a failure section when anything needs
//! attention.

use banter_runner::{BatchOutcome, Validation};

use crate::run_info::RunMetadata;

/// Generate a markdown report for a validation batch.
#[must_use]
pub fn generate_markdown_report(outcome: &BatchOutcome, meta: &RunMetadata) -> String {
    let mut md = String::with_capacity(4096);

    md.push_str("# BaNTER Beam-Perturbation Validation\n\n");

    md.push_str("## Summary\n\n");
    let summary = outcome.summary;
    md.push_str(&format!("- **Cases**: {}\n", summary.total));
    md.push_str(&format!(
        "- **PASS / FAIL / ERROR**: {} / {} / {}\n",
        summary.pass, summary.fail, summary.error
    ));
    let verdict = if summary.all_valid_passed() {
        "all valid cases passed"
    } else {
        "investigation needed"
    };
    md.push_str(&format!("- **Verdict**: {verdict}\n"));
    md.push_str(&format!(
        "- **Generated**: {} on {} ({})\n\n",
        meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        meta.hostname,
        meta.os
    ));

    md.push_str("## Results\n\n");
    md.push_str("| Perturbation | Log BF | Validation | Interpretation |\n");
    md.push_str("|--------------|--------|------------|----------------|\n");
    for report in &outcome.reports {
        let (log_bf, interpretation) = match report.comparison.as_ref() {
            Some(comparison) if comparison.succeeded() => (
                format!("{:.3}", comparison.log_bayes_factor().unwrap_or_default()),
                comparison
                    .interpretation()
                    .map_or_else(String::new, |i| i.to_string()),
            ),
            Some(comparison) => (
                "N/A".to_string(),
                comparison.error().unwrap_or("calculation failed").to_string(),
            ),
            None => ("N/A".to_string(), "analysis failed".to_string()),
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            report.perturbation,
            log_bf,
            status(report.validation),
            interpretation
        ));
    }
    md.push('\n');

    let troubled: Vec<_> = outcome
        .reports
        .iter()
        .filter(|report| report.validation != Validation::Pass)
        .collect();
    if !troubled.is_empty() {
        md.push_str("## Needs Attention\n\n");
        for report in troubled {
            let reason = match report.comparison.as_ref() {
                Some(comparison) if comparison.succeeded() => {
                    "evidence favors the signal model on foreground-only data".to_string()
                }
                Some(comparison) => comparison
                    .error()
                    .unwrap_or("comparison failed")
                    .to_string(),
                None => "plotting failed before the comparison".to_string(),
            };
            md.push_str(&format!(
                "- `{}` ({}): {}\n",
                report.perturbation,
                report.validation,
                reason
            ));
        }
        md.push('\n');
    }

    md
}

fn status(validation: Validation) -> &'static str {
    match validation {
        Validation::Pass => "\u{2713} PASS",
        Validation::Fail => "\u{2717} FAIL",
        Validation::Error => "\u{2717} ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::mixed_outcome;

    #[test]
    fn test_markdown_sections() {
        let md = generate_markdown_report(&mixed_outcome(), &RunMetadata::collect());

        assert!(md.contains("# BaNTER Beam-Perturbation Validation"));
        assert!(md.contains("## Summary"));
        assert!(md.contains("## Results"));
        assert!(md.contains("## Needs Attention"));
        assert!(md.contains("- **PASS / FAIL / ERROR**: 1 / 1 / 1"));
    }

    #[test]
    fn test_markdown_table_rows() {
        let md = generate_markdown_report(&mixed_outcome(), &RunMetadata::collect());

        assert!(md.contains("| -1e0pp | -10.000 | \u{2713} PASS |"));
        assert!(md.contains("| -2e0pp | 10.000 | \u{2717} FAIL |"));
        assert!(md.contains("| -5e0pp | N/A | \u{2717} ERROR |"));
    }

    #[test]
    fn test_markdown_attention_reasons() {
        let md = generate_markdown_report(&mixed_outcome(), &RunMetadata::collect());

        assert!(md.contains("evidence favors the signal model"));
        assert!(md.contains("stats file missing"));
    }

    #[test]
    fn test_markdown_no_attention_section_when_clean() {
        let mut outcome = mixed_outcome();
        outcome.reports.truncate(1);
        outcome.successful.truncate(1);
        outcome.summary = banter_runner::BatchSummary::from_reports(&outcome.reports);

        let md = generate_markdown_report(&outcome, &RunMetadata::collect());
        assert!(!md.contains("## Needs Attention"));
        assert!(md.contains("all valid cases passed"));
    }
}
