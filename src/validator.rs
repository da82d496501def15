//! Issue definition validation.
//!
//! [`run_validation`] is the main entry-point. It walks the configured issues
//! directory, checks every file with [`check_definition`], and assembles a
//! [`ValidationReport`]. Nothing here publishes or prints; see
//! [`publish`](crate::publish) and [`output`](crate::output) for that.
//!
//! Per-file check order is fixed: a decode failure short-circuits the file,
//! an archived file is skipped, otherwise the title rule runs before the
//! category rule.

use crate::config::Config;
use crate::error::ArmoryError;
use crate::issue::{IssueCode, ValidationIssue, ValidationReport};
use crate::rules;
use std::path::{Path, PathBuf};
use toml::Table;
use walkdir::WalkDir;

/// What happened to a single definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content was not UTF-8 or not valid TOML.
    Undecodable(ValidationIssue),
    /// `archived` is truthy; no rules ran.
    Archived,
    /// Title and category rules ran; the vector may be empty.
    Checked(Vec<ValidationIssue>),
}

impl FileOutcome {
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        match self {
            FileOutcome::Undecodable(issue) => vec![issue],
            FileOutcome::Archived => vec![],
            FileOutcome::Checked(issues) => issues,
        }
    }
}

/// Walks an issues directory and validates every file in it.
#[derive(Debug, Clone)]
pub struct Validator {
    workspace_root: PathBuf,
    issues_dir: PathBuf,
}

impl Validator {
    pub fn new(workspace_root: impl Into<PathBuf>, issues_dir: impl Into<PathBuf>) -> Self {
        Validator {
            workspace_root: workspace_root.into(),
            issues_dir: issues_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Validator::new(&config.workspace_root, config.issues_path())
    }

    pub fn issues_dir(&self) -> &Path {
        &self.issues_dir
    }

    /// Validates every file under the issues directory.
    ///
    /// # Errors
    ///
    /// Directory walk and read failures are fatal. Undecodable files are not;
    /// they become `ARMORY-003` issues.
    pub fn validate(&self) -> Result<ValidationReport, ArmoryError> {
        let files = collect_files(&self.issues_dir)?;

        let mut issues = Vec::new();
        let mut archived = 0usize;
        for file in &files {
            match self.validate_file(file)? {
                FileOutcome::Archived => archived += 1,
                outcome => issues.extend(outcome.into_issues()),
            }
        }

        Ok(ValidationReport::new(
            self.issues_dir.clone(),
            files.len(),
            archived,
            issues,
        ))
    }

    /// Reads and checks one file.
    pub fn validate_file(&self, file: &Path) -> Result<FileOutcome, ArmoryError> {
        let content = std::fs::read(file).map_err(|source| ArmoryError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        Ok(check_definition(
            &content,
            &vcs_path(file, &self.workspace_root),
        ))
    }
}

/// Runs a complete validation with the given configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use armory::{config::Config, validator};
///
/// let config = Config::default().with_workspace_root("/srv/checkout");
/// let report = validator::run_validation(&config)?;
/// println!("{} issues", report.result.issues.len());
/// # Ok::<(), armory::error::ArmoryError>(())
/// ```
pub fn run_validation(config: &Config) -> Result<ValidationReport, ArmoryError> {
    Validator::from_config(config).validate()
}

/// Applies every rule to the raw bytes of one definition file.
///
/// `path` is used verbatim as the issue location.
pub fn check_definition(content: &[u8], path: &str) -> FileOutcome {
    let text = match std::str::from_utf8(content) {
        Ok(text) => text,
        Err(e) => return undecodable(&e, path),
    };

    let data: Table = match toml::from_str(text) {
        Ok(data) => data,
        Err(e) => return undecodable(&e, path),
    };

    if rules::is_archived(&data) {
        return FileOutcome::Archived;
    }

    let issues = [
        rules::check_title(&data, path),
        rules::check_category(&data, path),
    ]
    .into_iter()
    .flatten()
    .collect();

    FileOutcome::Checked(issues)
}

fn undecodable(err: &dyn std::fmt::Display, path: &str) -> FileOutcome {
    FileOutcome::Undecodable(ValidationIssue::new(
        IssueCode::Decode,
        rules::decode_error_text(err),
        path,
    ))
}

/// Path of `file` relative to `workspace_root`.
///
/// Files outside the workspace root are returned unchanged.
///
/// ```
/// use std::path::Path;
/// use armory::validator::vcs_path;
///
/// assert_eq!(vcs_path(Path::new("/code/issues/A.toml"), Path::new("/code")), "issues/A.toml");
/// assert_eq!(vcs_path(Path::new("/other/A.toml"), Path::new("/code")), "/other/A.toml");
/// ```
pub fn vcs_path(file: &Path, workspace_root: &Path) -> String {
    file.strip_prefix(workspace_root)
        .unwrap_or(file)
        .to_string_lossy()
        .into_owned()
}

/// Recursively collects every file under `dir`, sorted by name within each
/// directory.
///
/// A missing `dir` yields no files. Symlinks to files are included; symlinked
/// directories are not descended into.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, ArmoryError> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
