//! Blacklist section - checks against the common-password list.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password is a known common password.
///
/// # Returns
/// - `Ok(Some(tip))` if the password is on the list
/// - `Ok(None)` otherwise
pub fn blacklist_section(password: &SecretString) -> SectionResult {
    if is_blacklisted(password.expose_secret()) {
        return Ok(Some(
            "Avoid common passwords like 'password' or '123456'.".to_string(),
        ));
    }
    Ok(None)
}
