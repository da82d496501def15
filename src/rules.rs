//! Validation rules for issue definition files.
//!
//! # Rules
//!
//! | Code | Message | What it checks |
//! |------|---------|----------------|
//! | `ARMORY-001` | `Missing title for issue.` | `title` must be a non-empty string |
//! | `ARMORY-001` | `Title should not end with a period.` | `title` must not end with `.` |
//! | `ARMORY-002` | `Missing category field.` | `category` must be present |
//! | `ARMORY-002` | `Invalid category field` | `category` must be a known [`Category`] |
//! | `ARMORY-003` | `Error decoding toml: …` | the file must be valid TOML |
//!
//! Files whose `archived` field is truthy are exempt from the title and
//! category rules.

use crate::issue::{IssueCode, ValidationIssue};
use std::fmt;
use std::str::FromStr;
use toml::{Table, Value};

pub const MISSING_TITLE: &str = "Missing title for issue.";
pub const TITLE_ENDS_WITH_PERIOD: &str = "Title should not end with a period.";
pub const MISSING_CATEGORY: &str = "Missing category field.";
pub const INVALID_CATEGORY: &str = "Invalid category field";
pub const DECODE_ERROR_PREFIX: &str = "Error decoding toml";

/// Classification an issue definition must declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BugRisk,
    Doc,
    Style,
    Antipattern,
    Coverage,
    Security,
    Performance,
    Typecheck,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::BugRisk,
        Category::Doc,
        Category::Style,
        Category::Antipattern,
        Category::Coverage,
        Category::Security,
        Category::Performance,
        Category::Typecheck,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BugRisk => "bug-risk",
            Category::Doc => "doc",
            Category::Style => "style",
            Category::Antipattern => "antipattern",
            Category::Coverage => "coverage",
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Typecheck => "typecheck",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the eight category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Loose truthiness for TOML values: empty strings, zero, `false` and empty
/// collections are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Array(a) => !a.is_empty(),
        Value::Table(t) => !t.is_empty(),
        Value::Datetime(_) => true,
    }
}

/// `true` when the definition carries a truthy `archived` field.
pub fn is_archived(data: &Table) -> bool {
    data.get("archived").is_some_and(is_truthy)
}

/// `ARMORY-001`: at most one title issue per file.
///
/// A non-string `title` counts as missing.
pub fn check_title(data: &Table, path: &str) -> Option<ValidationIssue> {
    match data.get("title").and_then(Value::as_str) {
        None | Some("") => Some(ValidationIssue::new(IssueCode::Title, MISSING_TITLE, path)),
        Some(title) if title.ends_with('.') => Some(ValidationIssue::new(
            IssueCode::Title,
            TITLE_ENDS_WITH_PERIOD,
            path,
        )),
        Some(_) => None,
    }
}

/// `ARMORY-002`: at most one category issue per file.
///
/// Falsy values count as missing; any other non-string value is invalid.
pub fn check_category(data: &Table, path: &str) -> Option<ValidationIssue> {
    let category = match data.get("category") {
        Some(value) if is_truthy(value) => value,
        _ => {
            return Some(ValidationIssue::new(
                IssueCode::Category,
                MISSING_CATEGORY,
                path,
            ))
        }
    };

    let valid = category
        .as_str()
        .is_some_and(|c| c.parse::<Category>().is_ok());
    if valid {
        None
    } else {
        Some(ValidationIssue::new(
            IssueCode::Category,
            INVALID_CATEGORY,
            path,
        ))
    }
}

/// `ARMORY-003` issue text for a parser error.
pub fn decode_error_text(err: &dyn fmt::Display) -> String {
    format!("{DECODE_ERROR_PREFIX}: {err}")
}

/// Metadata for a single rule, used by `list-rules` and `explain`.
pub struct RuleInfo {
    pub code: IssueCode,
    pub message: &'static str,
    pub remediation: &'static str,
}

/// Every rule the validator can raise, in code order.
pub fn all_rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            code: IssueCode::Title,
            message: MISSING_TITLE,
            remediation: "Add a non-empty `title` string to the issue definition",
        },
        RuleInfo {
            code: IssueCode::Title,
            message: TITLE_ENDS_WITH_PERIOD,
            remediation: "Drop the trailing period from `title`",
        },
        RuleInfo {
            code: IssueCode::Category,
            message: MISSING_CATEGORY,
            remediation: "Add a `category` field with one of: bug-risk, doc, style, antipattern, coverage, security, performance, typecheck",
        },
        RuleInfo {
            code: IssueCode::Category,
            message: INVALID_CATEGORY,
            remediation: "Use one of: bug-risk, doc, style, antipattern, coverage, security, performance, typecheck",
        },
        RuleInfo {
            code: IssueCode::Decode,
            message: "Error decoding toml",
            remediation: "Fix the TOML syntax at the position reported by the parser",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> Table {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn every_category_round_trips_through_its_name() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
    }

    #[test]
    fn category_match_is_case_sensitive() {
        assert!("Security".parse::<Category>().is_err());
        assert!("bug_risk".parse::<Category>().is_err());
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&Value::Boolean(false)));
        assert!(!is_truthy(&Value::String(String::new())));
        assert!(!is_truthy(&Value::Integer(0)));
        assert!(!is_truthy(&Value::Array(vec![])));
        assert!(is_truthy(&Value::Boolean(true)));
        assert!(is_truthy(&Value::String("yes".into())));
        assert!(is_truthy(&Value::Integer(1)));
    }

    #[test]
    fn archived_false_is_not_archived() {
        assert!(!is_archived(&table("archived = false")));
        assert!(is_archived(&table("archived = true")));
        assert!(!is_archived(&table("title = \"x\"")));
    }

    #[test]
    fn title_missing_empty_and_period() {
        let missing = check_title(&table(""), "f").unwrap();
        assert_eq!(missing.issue_text, MISSING_TITLE);

        let empty = check_title(&table("title = \"\""), "f").unwrap();
        assert_eq!(empty.issue_text, MISSING_TITLE);

        let period = check_title(&table("title = \"Do the thing.\""), "f").unwrap();
        assert_eq!(period.issue_text, TITLE_ENDS_WITH_PERIOD);
        assert_eq!(period.issue_code, IssueCode::Title);

        assert!(check_title(&table("title = \"Do the thing\""), "f").is_none());
    }

    #[test]
    fn non_string_title_counts_as_missing() {
        let issue = check_title(&table("title = 42"), "f").unwrap();
        assert_eq!(issue.issue_text, MISSING_TITLE);
    }

    #[test]
    fn category_missing_invalid_valid() {
        let missing = check_category(&table(""), "f").unwrap();
        assert_eq!(missing.issue_text, MISSING_CATEGORY);

        let empty = check_category(&table("category = \"\""), "f").unwrap();
        assert_eq!(empty.issue_text, MISSING_CATEGORY);

        let invalid = check_category(&table("category = \"invalid-cat\""), "f").unwrap();
        assert_eq!(invalid.issue_text, INVALID_CATEGORY);
        assert_eq!(invalid.issue_code, IssueCode::Category);

        let non_string = check_category(&table("category = 3"), "f").unwrap();
        assert_eq!(non_string.issue_text, INVALID_CATEGORY);

        for c in Category::ALL {
            let src = format!("category = \"{c}\"");
            assert!(check_category(&table(&src), "f").is_none(), "{c} should be valid");
        }
    }

    #[test]
    fn catalogue_covers_every_code() {
        let rules = all_rules();
        for code in [IssueCode::Title, IssueCode::Category, IssueCode::Decode] {
            assert!(rules.iter().any(|r| r.code == code));
        }
    }
}
