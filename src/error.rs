//! Fatal error types.
//!
//! Only conditions that stop a run live here. A definition file that fails to
//! decode is *not* an error: the validator records it as an `ARMORY-003`
//! issue and keeps walking.

use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// ArmoryError
///

#[derive(Debug, ThisError)]
pub enum ArmoryError {
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to walk issues directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write result file: {0}")]
    TempFile(std::io::Error),

    #[error("failed to run {}: {source}", binary.display())]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
