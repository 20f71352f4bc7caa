//! Strength estimator boundary - wraps the external estimation library.
//!
//! The estimator is the only external dependency of the analysis path, so
//! it sits behind a narrow trait. Any library that can report a guess-count
//! estimate and feedback can be substituted without touching the analyzer
//! or advisor logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("strength estimation failed: {0}")]
    Estimation(#[from] zxcvbn::ZxcvbnError),
}

/// Raw output of a strength estimator, before any rescaling.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// The estimator's native strength category (0-4 for zxcvbn).
    /// Carried as a pass-through field; the score shown to the user is
    /// derived from `guesses_log10` instead.
    pub qualitative_score: u8,
    /// Base-10 logarithm of the estimated number of guesses.
    pub guesses_log10: f64,
    /// Estimator warning, when one applies.
    pub warning: Option<String>,
    /// Estimator improvement suggestions.
    pub suggestions: Vec<String>,
}

/// A password strength estimation capability.
pub trait StrengthEstimator {
    /// Estimates the strength of `password`.
    ///
    /// # Errors
    /// Fails if the backing library rejects the input (e.g. a blank
    /// password). Callers treat this as fatal for the current check.
    fn estimate(&self, password: &SecretString) -> Result<Estimate, EstimatorError>;
}

/// Estimator backed by the zxcvbn library.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &SecretString) -> Result<Estimate, EstimatorError> {
        let entropy = zxcvbn::zxcvbn(password.expose_secret(), &[])?;

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().as_ref().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(Estimate {
            qualitative_score: entropy.score(),
            guesses_log10: entropy.guesses_log10(),
            warning,
            suggestions,
        })
    }
}
