//! Repetition section - checks for a single dominant character.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if any single character makes up more than half the password.
///
/// # Returns
/// - `Ok(Some(tip))` if one character dominates
/// - `Ok(None)` otherwise
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in pwd.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    // count > length / 2, kept in integers
    if counts.values().any(|&count| count * 2 > length) {
        return Ok(Some(
            "Avoid repeating the same character too often.".to_string(),
        ));
    }
    Ok(None)
}
