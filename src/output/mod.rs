//! Local output formatting for validation reports.
//!
//! These formats are for people and CI logs running `armory check`. The
//! reporter never sees them; it receives the envelope through
//! [`publish`](crate::publish).
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | The publishable envelope, indented |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | Code-scanning upload |

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::issue::ValidationReport;

/// Supported output formats.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text.
    Pretty,
    /// The result envelope as indented JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/).
    Sarif,
}

/// Formats a [`ValidationReport`] in the requested [`OutputFormat`].
pub fn format_report(report: &ValidationReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
