//! Password analyzer - turns estimator output into a 1-10 score.

use secrecy::SecretString;

use crate::estimator::{EstimatorError, StrengthEstimator};
use crate::types::Analysis;

/// Entropy ceiling for score rescaling, in bits. Anything at or above
/// this maps to the top score. Calibration value kept as-is for
/// compatibility with existing score output.
const MAX_ENTROPY_BITS: f64 = 80.0;

/// Analyzes a password through the given estimator.
///
/// Converts the estimator's guess-count logarithm to bits of entropy and
/// rescales it to a `1..=10` score. Warning and suggestions pass through
/// unchanged, defaulting to empty.
///
/// # Errors
/// Propagates estimator failures untouched.
pub fn analyze_password(
    estimator: &impl StrengthEstimator,
    password: &SecretString,
) -> Result<Analysis, EstimatorError> {
    let estimate = estimator.estimate(password)?;
    let entropy = estimate.guesses_log10 * std::f64::consts::LOG2_10;

    Ok(Analysis {
        score: score_from_entropy(entropy),
        entropy,
        warning: estimate.warning.unwrap_or_default(),
        suggestions: estimate.suggestions,
    })
}

/// Rescales entropy bits to an integer score in `1..=10`.
///
/// The entropy is clamped to `[0, MAX_ENTROPY_BITS]` and mapped linearly
/// onto nine steps; the fractional part is truncated, not rounded.
fn score_from_entropy(entropy_bits: f64) -> u8 {
    let clamped = entropy_bits.clamp(0.0, MAX_ENTROPY_BITS);
    (clamped / MAX_ENTROPY_BITS * 9.0) as u8 + 1
}
