use std::fmt;
use std::path::PathBuf;

/// Codes the validator can raise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum IssueCode {
    /// Missing title, or title ending in a period.
    #[serde(rename = "ARMORY-001")]
    Title,
    /// Missing or unknown category.
    #[serde(rename = "ARMORY-002")]
    Category,
    /// File could not be decoded as TOML.
    #[serde(rename = "ARMORY-003")]
    Decode,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::Title => "ARMORY-001",
            IssueCode::Category => "ARMORY-002",
            IssueCode::Decode => "ARMORY-003",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub begin: Point,
    pub end: Point,
}

impl Position {
    /// Zero-width position at a single point.
    pub fn at(line: usize, column: usize) -> Self {
        let point = Point { line, column };
        Position {
            begin: point,
            end: point,
        }
    }

    /// Line 1, column 0. Every issue the validator raises uses this; field
    /// level positions are not tracked.
    pub fn file_start() -> Self {
        Position::at(1, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Path relative to the workspace root.
    pub path: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationIssue {
    pub issue_code: IssueCode,
    pub issue_text: String,
    pub location: Location,
}

impl ValidationIssue {
    /// Builds an issue anchored at the start of `path`.
    pub fn new(issue_code: IssueCode, issue_text: impl Into<String>, path: &str) -> Self {
        ValidationIssue {
            issue_code,
            issue_text: issue_text.into(),
            location: Location {
                path: path.to_string(),
                position: Position::file_start(),
            },
        }
    }
}

/// The envelope handed to the reporter.
///
/// The field layout is the reporter's contract and must not change.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
    pub metrics: Vec<serde_json::Value>,
    /// `true` when at least one issue was found.
    ///
    /// The name reads the other way round, but the reporter consumes it with
    /// this meaning, so it is kept.
    pub is_passed: bool,
    pub errors: Vec<serde_json::Value>,
    pub extra_data: String,
}

impl ValidationResult {
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let is_passed = !issues.is_empty();
        ValidationResult {
            issues,
            metrics: vec![],
            is_passed,
            errors: vec![],
            extra_data: String::new(),
        }
    }

    /// Issue counts per code, in code order.
    pub fn count_by_code(&self) -> (usize, usize, usize) {
        self.issues
            .iter()
            .fold((0, 0, 0), |(t, c, d), i| match i.issue_code {
                IssueCode::Title => (t + 1, c, d),
                IssueCode::Category => (t, c + 1, d),
                IssueCode::Decode => (t, c, d + 1),
            })
    }
}

/// A finished run: the publishable envelope plus statistics for local output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationReport {
    pub issues_dir: PathBuf,
    pub generated_at: String,
    pub files_scanned: usize,
    pub files_archived: usize,
    pub result: ValidationResult,
}

impl ValidationReport {
    pub fn new(
        issues_dir: PathBuf,
        files_scanned: usize,
        files_archived: usize,
        issues: Vec<ValidationIssue>,
    ) -> Self {
        ValidationReport {
            issues_dir,
            generated_at: chrono::Utc::now().to_rfc3339(),
            files_scanned,
            files_archived,
            result: ValidationResult::from_issues(issues),
        }
    }

    /// `true` when no definition file has a problem.
    pub fn is_clean(&self) -> bool {
        self.result.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_serializes_in_reporter_shape() {
        let issue = ValidationIssue::new(IssueCode::Title, "Missing title for issue.", "a/b.toml");
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "issue_code": "ARMORY-001",
                "issue_text": "Missing title for issue.",
                "location": {
                    "path": "a/b.toml",
                    "position": {
                        "begin": {"line": 1, "column": 0},
                        "end": {"line": 1, "column": 0}
                    }
                }
            })
        );
    }

    #[test]
    fn is_passed_is_true_only_with_issues() {
        assert!(!ValidationResult::from_issues(vec![]).is_passed);
        let issue = ValidationIssue::new(IssueCode::Decode, "bad", "x.toml");
        assert!(ValidationResult::from_issues(vec![issue]).is_passed);
    }

    #[test]
    fn empty_envelope_fields() {
        let value = serde_json::to_value(ValidationResult::from_issues(vec![])).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "issues": [],
                "metrics": [],
                "is_passed": false,
                "errors": [],
                "extra_data": ""
            })
        );
    }

    #[test]
    fn counts_group_by_code() {
        let result = ValidationResult::from_issues(vec![
            ValidationIssue::new(IssueCode::Title, "t", "a"),
            ValidationIssue::new(IssueCode::Category, "c", "a"),
            ValidationIssue::new(IssueCode::Category, "c", "b"),
        ]);
        assert_eq!(result.count_by_code(), (1, 2, 0));
    }
}
