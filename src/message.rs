//! Report composition - renders an analysis into display text.

use crate::types::Analysis;

/// Composes the user-facing report for one check.
///
/// Below the acceptable threshold the estimator's suggestions and the
/// heuristic tips are shown together, estimator suggestions first, with a
/// retry prompt. At or above it only the estimator's own suggestions
/// appear, framed as already followed. The branch affects text only.
pub fn compose_report(analysis: &Analysis, extra_tips: &[String]) -> String {
    let mut msg = format!(
        "Entropy: {:.1} bits\nStrength score: {}/10",
        analysis.entropy, analysis.score
    );

    if analysis.is_acceptable() {
        msg.push_str(" (strong)\n");
        if !analysis.warning.is_empty() {
            msg.push_str(&format!("Warning: {}\n", analysis.warning));
        }
        if !analysis.suggestions.is_empty() {
            msg.push_str("Suggestions you have already followed:\n");
            for tip in &analysis.suggestions {
                msg.push_str(&format!(" - {}\n", tip));
            }
        }
    } else {
        msg.push_str(" (too weak)\n");
        if !analysis.warning.is_empty() {
            msg.push_str(&format!("Warning: {}\n", analysis.warning));
        }
        let combined: Vec<&String> = analysis.suggestions.iter().chain(extra_tips).collect();
        if !combined.is_empty() {
            msg.push_str("Suggestions to improve:\n");
            for tip in combined {
                msg.push_str(&format!(" - {}\n", tip));
            }
        }
        msg.push_str("\nTry editing your password and check again.");
    }

    msg
}
