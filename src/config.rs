//! Configuration loading and management.
//!
//! The run is driven by a single [`Config`] value built once at startup and
//! passed down explicitly. It can come from three places, highest priority
//! first:
//!
//! 1. Command-line flags (`--workspace`, `--marvin`) and the `CODE_PATH`
//!    environment variable, applied by the CLI through [`Config::with_workspace_root`]
//!    and [`Config::with_publish_binary`].
//! 2. An `armory.toml` file, read by [`Config::load`].
//! 3. Built-in defaults ([`Config::default`]).
//!
//! ```rust,no_run
//! use armory::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! println!("scanning {}", config.issues_path().display());
//! ```

use crate::error::ArmoryError;
use std::path::{Path, PathBuf};

/// Workspace root used when neither `CODE_PATH` nor a config file sets one.
pub const DEFAULT_WORKSPACE_ROOT: &str = "/code";

/// Location of the issue definitions relative to the workspace root.
pub const DEFAULT_ISSUES_DIR: &str = ".deepsource/analyzer/issues";

/// Name of the config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "armory.toml";

/// Main configuration for a validation run.
///
/// All fields carry defaults so the config file can be omitted entirely.
///
/// # Examples
///
/// ```
/// use armory::config::Config;
///
/// let config = Config::default().with_workspace_root("/tmp/repo");
/// assert_eq!(
///     config.issues_path(),
///     std::path::Path::new("/tmp/repo/.deepsource/analyzer/issues"),
/// );
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Checkout root. Reported paths are made relative to it.
    pub workspace_root: PathBuf,
    /// Directory holding issue definitions, relative to `workspace_root`.
    pub issues_dir: PathBuf,
    /// How results are handed to the reporter.
    pub publish: PublishConfig,
}

/// Settings for the external reporting binary.
///
/// ```toml
/// [publish]
/// binary = "/toolbox/marvin"
/// flag = "--publish-report"
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Path to the reporter executable.
    pub binary: PathBuf,
    /// Flag passed before the result file path.
    pub flag: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workspace_root: PathBuf::from(DEFAULT_WORKSPACE_ROOT),
            issues_dir: PathBuf::from(DEFAULT_ISSUES_DIR),
            publish: PublishConfig::default(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            binary: PathBuf::from("/toolbox/marvin"),
            flag: "--publish-report".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `armory.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`ArmoryError::ConfigNotFound`] when an explicit path does not
    /// exist, [`ArmoryError::ConfigRead`] when the file cannot be read, and
    /// [`ArmoryError::ConfigParse`] when the TOML is invalid.
    pub fn load(path: Option<&Path>) -> Result<Config, ArmoryError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(ArmoryError::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            return Ok(Config::default());
        };

        let content =
            std::fs::read_to_string(&path).map_err(|source| ArmoryError::ConfigRead {
                path: path.clone(),
                source,
            })?;
        toml::from_str(&content).map_err(|source| ArmoryError::ConfigParse { path, source })
    }

    /// Replaces the workspace root.
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = root.into();
        self
    }

    /// Replaces the reporter binary.
    pub fn with_publish_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.publish.binary = binary.into();
        self
    }

    /// Absolute location of the issue definitions.
    ///
    /// An absolute `issues_dir` is used as-is.
    pub fn issues_path(&self) -> PathBuf {
        self.workspace_root.join(&self.issues_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_code_checkout() {
        let config = Config::default();
        assert_eq!(
            config.issues_path(),
            Path::new("/code/.deepsource/analyzer/issues")
        );
        assert_eq!(config.publish.flag, "--publish-report");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("workspace_root = \"/srv/repo\"").unwrap();
        assert_eq!(config.workspace_root, Path::new("/srv/repo"));
        assert_eq!(config.issues_dir, Path::new(DEFAULT_ISSUES_DIR));
        assert_eq!(config.publish.binary, Path::new("/toolbox/marvin"));
    }

    #[test]
    fn publish_section_overrides_binary() {
        let config: Config =
            toml::from_str("[publish]\nbinary = \"/usr/local/bin/marvin\"\n").unwrap();
        assert_eq!(config.publish.binary, Path::new("/usr/local/bin/marvin"));
        assert_eq!(config.publish.flag, "--publish-report");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/armory.toml"))).unwrap_err();
        assert!(matches!(err, ArmoryError::ConfigNotFound(_)));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armory.toml");
        std::fs::write(&path, "workspace_root = ").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ArmoryError::ConfigParse { .. }));
    }
}
