//! JSON output formatter.
//!
//! Emits exactly the envelope the reporter receives, indented for reading.

use crate::issue::ValidationReport;

/// Formats the report's envelope as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the envelope cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let mut out = serde_json::to_string_pretty(&report.result).expect("JSON serialization failed");
    out.push('\n');
    out
}
