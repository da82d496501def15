//! Human-readable colored text formatter.

use crate::issue::{IssueCode, ValidationReport};
use colored::Colorize;

/// Formats a [`ValidationReport`] as ANSI-colored text.
///
/// Sections rendered (in order): header, issues with their locations, and a
/// one-line summary.
pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        format!("  Issue Definitions: {}  ", report.issues_dir.display())
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n\n", report.generated_at));

    let issues = &report.result.issues;
    if !issues.is_empty() {
        out.push_str(&format!("{}\n", "Issues".bold().underline()));
        for issue in issues {
            let code = match issue.issue_code {
                IssueCode::Decode => issue.issue_code.as_str().red().bold().to_string(),
                _ => issue.issue_code.as_str().yellow().bold().to_string(),
            };
            let begin = issue.location.position.begin;
            // Parser messages span several lines; keep the listing aligned.
            let text = issue.issue_text.replace('\n', "\n         ");
            out.push_str(&format!("  [{code}] {text}\n"));
            out.push_str(&format!(
                "         {}\n",
                format!("{}:{}:{}", issue.location.path, begin.line, begin.column).dimmed()
            ));
        }
        out.push('\n');
    }

    let status = if report.is_clean() {
        "CLEAN".green().bold().to_string()
    } else {
        "ISSUES FOUND".red().bold().to_string()
    };
    let (title, category, decode) = report.result.count_by_code();
    out.push_str(&format!(
        "Result: {status}  |  {} files scanned, {} archived  |  {} title, {} category, {} decode\n",
        report.files_scanned, report.files_archived, title, category, decode,
    ));

    out
}
