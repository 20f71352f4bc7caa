//! Heuristic advice sections
//!
//! Each section inspects one aspect of the raw password and may emit a
//! plain-language improvement tip. Sections are independent: every one
//! runs on every password, in the order fixed by the advisor.

mod blacklist;
mod case;
mod digits;
mod length;
mod repetition;
mod symbols;

pub use blacklist::blacklist_section;
pub use case::case_mixing_section;
pub use digits::digit_section;
pub use length::length_section;
pub use repetition::repetition_section;
pub use symbols::symbol_section;

/// Result type for section evaluation functions.
/// - `Ok(Some(tip))` - Check fired, tip should be shown
/// - `Ok(None)` - Check passed
/// - `Err(())` - Fatal error during evaluation
pub type SectionResult = Result<Option<String>, ()>;
