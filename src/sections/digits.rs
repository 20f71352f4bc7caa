//! Digit section - checks for decimal digits.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password contains at least one decimal digit.
///
/// # Returns
/// - `Ok(Some(tip))` if no digit is present
/// - `Ok(None)` if a digit is present
pub fn digit_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_digit()) {
        return Ok(Some("Add some numbers (e.g., 3, 7, 9).".to_string()));
    }
    Ok(None)
}
