//! Shared fixtures for report tests

use banter_evidence::{
    ComparisonOutcome, EvidenceComparison, Interpretation, interpret_log_bayes_factor,
};
use banter_runner::{
    BatchOutcome, BatchSummary, PerturbationReport, SuccessfulResult, Validation,
};

fn completed(level: &str, log_evidence_1: f64, log_evidence_2: f64) -> EvidenceComparison {
    let log_bayes_factor = log_evidence_1 - log_evidence_2;
    EvidenceComparison {
        model_1: format!("GSM_FgEoR_{level}"),
        model_2: format!("GSM_FgOnly_{level}"),
        outcome: ComparisonOutcome::Completed {
            log_evidence_1,
            log_evidence_2,
            log_bayes_factor,
            interpretation: interpret_log_bayes_factor(log_bayes_factor),
        },
    }
}

fn flat(level: &str, log_evidence_1: f64, log_evidence_2: f64) -> SuccessfulResult {
    let log_bayes_factor = log_evidence_1 - log_evidence_2;
    SuccessfulResult {
        perturbation: level.to_string(),
        log_evidence_fgeor: log_evidence_1,
        log_evidence_fgonly: log_evidence_2,
        log_bayes_factor,
        validation: if log_bayes_factor < 0.0 {
            Validation::Pass
        } else {
            Validation::Fail
        },
        interpretation: interpret_log_bayes_factor(log_bayes_factor),
    }
}

/// One PASS, one FAIL, one ERROR report.
pub(crate) fn mixed_outcome() -> BatchOutcome {
    let reports = vec![
        PerturbationReport {
            perturbation: "-1e0pp".to_string(),
            plot_success: true,
            comparison: Some(completed("-1e0pp", 10.0, 20.0)),
            validation: Validation::Pass,
        },
        PerturbationReport {
            perturbation: "-2e0pp".to_string(),
            plot_success: true,
            comparison: Some(completed("-2e0pp", 20.0, 10.0)),
            validation: Validation::Fail,
        },
        PerturbationReport {
            perturbation: "-5e0pp".to_string(),
            plot_success: true,
            comparison: Some(EvidenceComparison {
                model_1: "GSM_FgEoR_-5e0pp".to_string(),
                model_2: "GSM_FgOnly_-5e0pp".to_string(),
                outcome: ComparisonOutcome::Failed {
                    error: "error calculating Bayes factor: stats file missing".to_string(),
                },
            }),
            validation: Validation::Error,
        },
    ];

    BatchOutcome {
        summary: BatchSummary::from_reports(&reports),
        successful: vec![flat("-1e0pp", 10.0, 20.0), flat("-2e0pp", 20.0, 10.0)],
        reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_consistent() {
        let outcome = mixed_outcome();
        assert_eq!(outcome.summary.total, 3);
        assert_eq!(outcome.summary.pass, 1);
        assert_eq!(outcome.summary.fail, 1);
        assert_eq!(outcome.summary.error, 1);
        assert_eq!(outcome.successful.len(), 2);
        assert_eq!(
            outcome.successful[0].interpretation,
            Interpretation::VeryStrongModel2
        );
    }
}
