//! Heuristic advisor - supplementary tips computed from the raw password.
//!
//! Independent of the strength estimator: every section runs on every
//! password, and each contributes at most one tip.

use secrecy::SecretString;

use crate::sections::{
    SectionResult, blacklist_section, case_mixing_section, digit_section, length_section,
    repetition_section, symbol_section,
};

/// Produces improvement tips from the raw password string.
///
/// Sections run unconditionally in a fixed order; the returned tips keep
/// that order. A password that is long, mixes cases, contains digits and
/// symbols, has no dominant character, and is not a known common password
/// yields an empty list.
pub fn suggest_improvements(password: &SecretString) -> Vec<String> {
    let mut tips = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: Vec<(&str, fn(&SecretString) -> SectionResult)> = vec![
        ("length", length_section),
        ("case", case_mixing_section),
        ("digits", digit_section),
        ("symbols", symbol_section),
        ("repetition", repetition_section),
        ("blacklist", blacklist_section),
    ];

    for (section_name, section_fn) in sections {
        match section_fn(password) {
            Ok(Some(tip)) => {
                tips.push(tip);
            }
            Ok(None) => {
                // Section passed, continue
            }
            Err(()) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Fatal error in advice section: {}", section_name);
                let _ = section_name;
            }
        }
    }

    tips
}
