//! Symbol section - checks for special symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// The fixed set of characters that count as special symbols.
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:',.<>/?`~";

/// Checks if the password contains at least one special symbol.
///
/// # Returns
/// - `Ok(Some(tip))` if no symbol from the set is present
/// - `Ok(None)` if a symbol is present
pub fn symbol_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| SYMBOLS.contains(c)) {
        return Ok(Some("Include special symbols (!@#$, etc.).".to_string()));
    }
    Ok(None)
}
