//! Perturbation-level identifiers
//!
//! Beam perturbations are labeled `<sign><mantissa>pp`, e.g. `-1e-3pp` for
//! a -0.001 percentage-point FWHM perturbation. The leading sign is
//! mandatory; the mantissa is a plain decimal or `<base>e<exponent>`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifier grammar: sign, mantissa, `pp` suffix.
static LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is static and verified by the tests below.
    Regex::new(r"^(?P<sign>[+-])(?P<mantissa>.+)pp$").expect("static level regex")
});

/// Sign of a perturbation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// FWHM narrowed
    Negative,
    /// FWHM widened
    Positive,
}

impl Sign {
    /// The sign character as it appears in identifiers
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Negative => '-',
            Self::Positive => '+',
        }
    }
}

/// A parsed perturbation-level identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationLevel {
    /// Identifier as it appears in catalog keys (e.g. `-1e-3pp`)
    pub label: String,
    /// Leading sign
    pub sign: Sign,
    /// Unsigned magnitude; 0 when the mantissa is malformed
    pub magnitude: f64,
}

impl PerturbationLevel {
    /// Parse an identifier.
    ///
    /// Returns `None` when the leading sign is missing; such keys are not
    /// perturbation levels. A malformed mantissa (or a missing `pp`
    /// suffix) yields magnitude 0 rather than an error, so unexpected keys
    /// still sort deterministically.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let sign = match label.chars().next()? {
            '-' => Sign::Negative,
            '+' => Sign::Positive,
            _ => return None,
        };
        Some(Self {
            label: label.to_string(),
            sign,
            magnitude: magnitude_of(label),
        })
    }
}

impl std::fmt::Display for PerturbationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Sort levels ascending by magnitude.
///
/// The sort is stable, so equal magnitudes (including all malformed
/// mantissas at 0) keep their relative order and reruns are identical.
pub fn sort_by_magnitude(levels: &mut [PerturbationLevel]) {
    levels.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
}

/// Magnitude of an identifier: `base * 10^exponent` for exponential
/// mantissas, the plain value otherwise, 0 when malformed.
fn magnitude_of(label: &str) -> f64 {
    let Some(captures) = LEVEL_REGEX.captures(label) else {
        return 0.0;
    };
    parse_mantissa(&captures["mantissa"]).unwrap_or(0.0)
}

fn parse_mantissa(mantissa: &str) -> Option<f64> {
    if let Some((base, exponent)) = mantissa.split_once('e') {
        // Exponents may themselves be fractional (e.g. "2e0.5").
        let base: f64 = base.parse().ok()?;
        let exponent: f64 = exponent.parse().ok()?;
        Some(base * 10f64.powf(exponent))
    } else {
        mantissa.parse().ok()
    }
}
