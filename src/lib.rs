//! # armory
//!
//! Validator for custom analyzer issue definitions.
//!
//! A custom analyzer keeps one TOML file per issue under
//! `.deepsource/analyzer/issues`. `armory` walks that directory, checks each
//! file, and publishes the findings to the analysis reporter.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use armory::{config::Config, publish::{MarvinPublisher, Publisher}, validator};
//!
//! let config = Config::load(None)?.with_workspace_root("/code");
//! let report = validator::run_validation(&config)?;
//! MarvinPublisher::from_config(&config.publish).publish(&report.result)?;
//! # Ok::<(), armory::error::ArmoryError>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** — workspace root, issues directory, reporter settings.
//! 2. **[`validator`]** — directory walk and per-file checks.
//! 3. **[`rules`]** — the `ARMORY-00N` rules and the category set.
//! 4. **[`issue`]** — core data types ([`issue::ValidationIssue`],
//!    [`issue::ValidationResult`]).
//! 5. **[`publish`]** — the [`publish::Publisher`] seam and the reporter hand-off.
//! 6. **[`output`]** — pretty, JSON, and [SARIF] renderings for local runs.
//!
//! ## Rules
//!
//! | Code | Checks |
//! |------|--------|
//! | `ARMORY-001` | `title` present, non-empty, no trailing period |
//! | `ARMORY-002` | `category` present and one of the eight known categories |
//! | `ARMORY-003` | file decodes as TOML |
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod error;
pub mod issue;
pub mod output;
pub mod publish;
pub mod rules;
pub mod validator;
