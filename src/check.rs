//! The check operation - one password in, one report out.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::advisor::suggest_improvements;
use crate::analyzer::analyze_password;
use crate::estimator::{EstimatorError, StrengthEstimator};
use crate::message::compose_report;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Please enter a password.")]
    EmptyPassword,
    #[cfg(feature = "async")]
    #[error("Password check cancelled")]
    Cancelled,
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}

/// Checks a password and returns the display report.
///
/// Empty input fails before the estimator is invoked. Estimator failures
/// propagate untouched.
///
/// # Arguments
/// * `estimator` - The strength estimation capability
/// * `password` - The password to check
/// * `token` - Optional cancellation token (async feature only)
pub fn check_password(
    estimator: &impl StrengthEstimator,
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<String, CheckError> {
    if password.expose_secret().is_empty() {
        return Err(CheckError::EmptyPassword);
    }

    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Err(CheckError::Cancelled);
            }
        }
    }

    let analysis = analyze_password(estimator, password)?;

    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Err(CheckError::Cancelled);
            }
        }
    }

    let extra_tips = suggest_improvements(password);
    Ok(compose_report(&analysis, &extra_tips))
}

/// Async version that sends the check outcome via channel.
///
/// Sleeps briefly before checking so rapid successive calls (e.g. while
/// the user is still typing) can be cancelled before doing any work.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    estimator: &impl StrengthEstimator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<String, CheckError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let outcome = check_password(estimator, password, Some(token));

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
        let _ = e;
    }
}
