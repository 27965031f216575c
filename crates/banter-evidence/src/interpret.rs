//! Evidence-strength interpretation of log-Bayes factors
//!
//! Thresholds follow the Jeffreys-style scale used throughout the BayesEoR
//! beam studies: half-open bands at |ln BF| = 1, 3 and 5.

use serde::{Deserialize, Serialize};

/// Strength-of-evidence category for a log-Bayes factor (model 1 over model 2).
///
/// Variants are declared strongest-for-model-1 first, so the derived
/// ordering tracks decreasing log-Bayes factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interpretation {
    /// ln BF > 5
    #[serde(rename = "Very strong evidence for model 1")]
    VeryStrongModel1,
    /// 3 < ln BF <= 5
    #[serde(rename = "Strong evidence for model 1")]
    StrongModel1,
    /// 1 < ln BF <= 3
    #[serde(rename = "Moderate evidence for model 1")]
    ModerateModel1,
    /// -1 < ln BF <= 1
    #[serde(rename = "Weak/inconclusive evidence")]
    Inconclusive,
    /// -3 < ln BF <= -1
    #[serde(rename = "Moderate evidence for model 2")]
    ModerateModel2,
    /// -5 < ln BF <= -3
    #[serde(rename = "Strong evidence for model 2")]
    StrongModel2,
    /// ln BF <= -5
    #[serde(rename = "Very strong evidence for model 2")]
    VeryStrongModel2,
}

impl Interpretation {
    /// Get all categories, strongest for model 1 first
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::VeryStrongModel1,
            Self::StrongModel1,
            Self::ModerateModel1,
            Self::Inconclusive,
            Self::ModerateModel2,
            Self::StrongModel2,
            Self::VeryStrongModel2,
        ]
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryStrongModel1 => "Very strong evidence for model 1",
            Self::StrongModel1 => "Strong evidence for model 1",
            Self::ModerateModel1 => "Moderate evidence for model 1",
            Self::Inconclusive => "Weak/inconclusive evidence",
            Self::ModerateModel2 => "Moderate evidence for model 2",
            Self::StrongModel2 => "Strong evidence for model 2",
            Self::VeryStrongModel2 => "Very strong evidence for model 2",
        }
    }

    /// True when the category favors model 1
    #[must_use]
    pub const fn favors_model_1(&self) -> bool {
        matches!(
            self,
            Self::VeryStrongModel1 | Self::StrongModel1 | Self::ModerateModel1
        )
    }

    /// True when the category favors model 2
    #[must_use]
    pub const fn favors_model_2(&self) -> bool {
        matches!(
            self,
            Self::ModerateModel2 | Self::StrongModel2 | Self::VeryStrongModel2
        )
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the strength of evidence from a log-Bayes factor.
///
/// Total over all inputs; thresholds are strict on the upper side of each
/// band, so e.g. ln BF = 5 is "Strong", not "Very strong".
#[must_use]
pub fn interpret_log_bayes_factor(log_bf: f64) -> Interpretation {
    if log_bf > 5.0 {
        Interpretation::VeryStrongModel1
    } else if log_bf > 3.0 {
        Interpretation::StrongModel1
    } else if log_bf > 1.0 {
        Interpretation::ModerateModel1
    } else if log_bf > -1.0 {
        Interpretation::Inconclusive
    } else if log_bf > -3.0 {
        Interpretation::ModerateModel2
    } else if log_bf > -5.0 {
        Interpretation::StrongModel2
    } else {
        Interpretation::VeryStrongModel2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest_impl::log_bf_strategy;
    use proptest::prelude::*;

    #[test]
    fn test_interpret_boundaries() {
        let cases = [
            (6.0, Interpretation::VeryStrongModel1),
            (5.0, Interpretation::StrongModel1),
            (4.0, Interpretation::StrongModel1),
            (3.0, Interpretation::ModerateModel1),
            (2.0, Interpretation::ModerateModel1),
            (1.0, Interpretation::Inconclusive),
            (0.0, Interpretation::Inconclusive),
            (-1.0, Interpretation::ModerateModel2),
            (-2.0, Interpretation::ModerateModel2),
            (-3.0, Interpretation::StrongModel2),
            (-4.0, Interpretation::StrongModel2),
            (-5.0, Interpretation::VeryStrongModel2),
            (-6.0, Interpretation::VeryStrongModel2),
        ];

        for (log_bf, expected) in cases {
            assert_eq!(
                interpret_log_bayes_factor(log_bf),
                expected,
                "log_bf = {log_bf}"
            );
        }
    }

    #[test]
    fn test_interpret_just_above_boundary() {
        assert_eq!(
            interpret_log_bayes_factor(5.0001),
            Interpretation::VeryStrongModel1
        );
        assert_eq!(
            interpret_log_bayes_factor(-4.9999),
            Interpretation::StrongModel2
        );
    }

    #[test]
    fn test_labels_match_display() {
        for category in Interpretation::all() {
            assert_eq!(format!("{category}"), category.label());
        }
    }

    #[test]
    fn test_label_text() {
        assert_eq!(
            Interpretation::VeryStrongModel1.label(),
            "Very strong evidence for model 1"
        );
        assert_eq!(
            Interpretation::Inconclusive.label(),
            "Weak/inconclusive evidence"
        );
        assert_eq!(
            Interpretation::VeryStrongModel2.label(),
            "Very strong evidence for model 2"
        );
    }

    #[test]
    fn test_favors_helpers() {
        assert!(Interpretation::StrongModel1.favors_model_1());
        assert!(!Interpretation::StrongModel1.favors_model_2());
        assert!(Interpretation::ModerateModel2.favors_model_2());
        assert!(!Interpretation::Inconclusive.favors_model_1());
        assert!(!Interpretation::Inconclusive.favors_model_2());
    }

    #[test]
    fn test_serialize_as_label() {
        let json = serde_json::to_string(&Interpretation::StrongModel2).expect("serialize");
        assert_eq!(json, "\"Strong evidence for model 2\"");

        let parsed: Interpretation =
            serde_json::from_str("\"Weak/inconclusive evidence\"").expect("deserialize");
        assert_eq!(parsed, Interpretation::Inconclusive);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            interpret_log_bayes_factor(f64::INFINITY),
            Interpretation::VeryStrongModel1
        );
        assert_eq!(
            interpret_log_bayes_factor(f64::NEG_INFINITY),
            Interpretation::VeryStrongModel2
        );
    }

    proptest! {
        #[test]
        fn prop_classifier_total(log_bf in log_bf_strategy()) {
            let category = interpret_log_bayes_factor(log_bf);
            prop_assert!(Interpretation::all().contains(&category));
        }

        #[test]
        fn prop_classifier_monotone(a in log_bf_strategy(), b in log_bf_strategy()) {
            // Smaller log-BF never favors model 1 more strongly.
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(interpret_log_bayes_factor(lo) >= interpret_log_bayes_factor(hi));
        }
    }
}
