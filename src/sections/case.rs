//! Case-mixing section - checks for a mix of uppercase and lowercase.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password mixes uppercase and lowercase letters.
///
/// A password with no letters at all counts as unmixed: lowercasing
/// leaves it unchanged, so the tip fires.
///
/// # Returns
/// - `Ok(Some(tip))` if the password is entirely one case
/// - `Ok(None)` if both cases are present
pub fn case_mixing_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if pwd.to_lowercase() == pwd || pwd.to_uppercase() == pwd {
        return Ok(Some("Mix uppercase and lowercase letters.".to_string()));
    }
    Ok(None)
}
