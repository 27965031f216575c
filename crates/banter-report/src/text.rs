//! Fixed-width text rendering of batch outcomes
//!
//! These strings are informational output for terminals and logs; callers
//! must not parse them.

use banter_runner::{BatchOutcome, Validation};

const RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Render the batch summary table.
#[must_use]
pub fn render_summary_table(outcome: &BatchOutcome) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str(RULE);
    out.push('\n');
    out.push_str("BANTER PERTURBATION VALIDATION SUMMARY\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{:<14} {:<10} {:<12} {}\n",
        "Perturbation", "Log BF", "Validation", "Interpretation"
    ));
    out.push_str(LIGHT_RULE);
    out.push('\n');

    for report in &outcome.reports {
        let row = match report.comparison.as_ref() {
            Some(comparison) if comparison.succeeded() => {
                let log_bf = comparison.log_bayes_factor().unwrap_or_default();
                let interpretation = comparison
                    .interpretation()
                    .map_or_else(String::new, |i| i.to_string());
                format!(
                    "{:<14} {:<10.3} {:<12} {}\n",
                    report.perturbation,
                    log_bf,
                    marker(report.validation),
                    interpretation
                )
            }
            Some(_) => format!(
                "{:<14} {:<10} {:<12} {}\n",
                report.perturbation,
                "N/A",
                marker(report.validation),
                "Calculation failed"
            ),
            None => format!(
                "{:<14} {:<10} {:<12} {}\n",
                report.perturbation,
                "ERROR",
                marker(report.validation),
                "Analysis failed"
            ),
        };
        out.push_str(&row);
    }

    out.push_str(LIGHT_RULE);
    out.push('\n');
    let summary = outcome.summary;
    out.push_str(&format!(
        "TOTAL: {} cases | PASS: {} | FAIL: {} | ERROR: {}\n",
        summary.total, summary.pass, summary.fail, summary.error
    ));

    if summary.all_valid_passed() {
        out.push_str("All valid cases passed BaNTER validation\n");
    } else if summary.fail > 0 {
        out.push_str("Some cases failed BaNTER validation - investigation needed\n");
    }
    out.push_str(&format!(
        "\nBaNTER validation complete - processed {} perturbation levels\n",
        summary.total
    ));

    out
}

/// Render the per-scenario evidence breakdown of the successful results.
#[must_use]
pub fn render_detailed_results(outcome: &BatchOutcome) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str("============================================================\n");
    out.push_str("DETAILED RESULTS FOR FURTHER ANALYSIS\n");
    out.push_str("============================================================\n");

    for result in &outcome.successful {
        out.push_str(&format!("Perturbation: {}\n", result.perturbation));
        out.push_str(&format!(
            "  FgEoR evidence: {:.6}\n",
            result.log_evidence_fgeor
        ));
        out.push_str(&format!(
            "  FgOnly evidence: {:.6}\n",
            result.log_evidence_fgonly
        ));
        out.push_str(&format!(
            "  Log Bayes factor: {:.6}\n",
            result.log_bayes_factor
        ));
        out.push_str(&format!("  Validation: {}\n", result.validation));
        out.push_str(&format!("  Interpretation: {}\n\n", result.interpretation));
    }

    out.push_str(&format!(
        "Successfully analyzed {} out of {} perturbations\n",
        outcome.successful.len(),
        outcome.summary.total
    ));

    out
}

fn marker(validation: Validation) -> String {
    match validation {
        Validation::Pass => "\u{2713} PASS".to_string(),
        Validation::Fail => "\u{2717} FAIL".to_string(),
        Validation::Error => "\u{2717} ERROR".to_string(),
    }
}
