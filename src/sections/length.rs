//! Length section - checks recommended minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 12;

/// Checks if the password meets the recommended minimum length.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Ok(Some(tip))` if password is shorter than recommended
/// - `Ok(None)` if password is long enough
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Ok(Some("Use at least 12 characters.".to_string()));
    }
    Ok(None)
}
