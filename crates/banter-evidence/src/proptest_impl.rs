//! Proptest strategies for evidence types
//!
//! Used by the classifier and identifier property tests.

use proptest::prelude::*;

use crate::perturbation::PerturbationLevel;

/// Strategy for log-Bayes factors, weighted toward the classification
/// boundaries where regressions hide.
pub fn log_bf_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -20.0..20.0f64,
        1 => prop::sample::select(vec![-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]),
        1 => prop::sample::select(vec![f64::MIN, f64::MAX, 0.0]),
    ]
}

/// Strategy for well-formed perturbation identifiers (e.g. `-1e-3pp`)
pub fn level_label_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["-", "+"]),
        1u32..10,
        prop::sample::select(vec![-3i32, -2, -1, 0, 1]),
    )
        .prop_map(|(sign, base, exponent)| format!("{sign}{base}e{exponent}pp"))
}

/// Strategy for parsed perturbation levels
pub fn level_strategy() -> impl Strategy<Value = PerturbationLevel> {
    level_label_strategy().prop_map(|label| {
        PerturbationLevel::parse(&label).unwrap_or_else(|| unreachable!("generated labels parse"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perturbation::sort_by_magnitude;

    proptest! {
        #[test]
        fn prop_generated_labels_parse(label in level_label_strategy()) {
            let level = PerturbationLevel::parse(&label);
            prop_assert!(level.is_some());
        }

        #[test]
        fn prop_magnitude_is_nonnegative(level in level_strategy()) {
            prop_assert!(level.magnitude >= 0.0);
        }

        #[test]
        fn prop_sort_is_idempotent(mut levels in prop::collection::vec(level_strategy(), 0..8)) {
            sort_by_magnitude(&mut levels);
            let once = levels.clone();
            sort_by_magnitude(&mut levels);
            prop_assert_eq!(levels, once);
        }
    }
}
