//! Render a validation outcome as a human-readable multi-section report.
//!
//! Pure formatting: deterministic output, findings in the order received,
//! no I/O.

use crate::validate::ValidationOutcome;

pub fn format_report(outcome: &ValidationOutcome) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !outcome.errors.is_empty() {
        lines.push("Job descriptor validation FAILED.".to_string());
        lines.push(String::new());
        lines.push("ERRORS".to_string());
        for issue in &outcome.errors {
            lines.push(format!("  - {}", issue));
        }
    }

    if !outcome.warnings.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("WARNINGS".to_string());
        for issue in &outcome.warnings {
            lines.push(format!("  - {}", issue));
        }
    }

    if lines.is_empty() {
        lines.push("Job descriptor is valid. No problems found.".to_string());
    }

    lines.push(String::new());
    lines.join("\n")
}
