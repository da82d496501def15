//! Hand-off of results to the analysis reporter.
//!
//! The validator never publishes on its own; callers pick a [`Publisher`].
//! [`MarvinPublisher`] is the production path: it writes the JSON envelope
//! to a fresh temporary file and runs
//!
//! ```text
//! /toolbox/marvin --publish-report <file>
//! ```
//!
//! The reporter's exit status is not inspected. Failing to write the file or
//! to start the reporter is fatal.

use crate::config::PublishConfig;
use crate::error::ArmoryError;
use crate::issue::ValidationResult;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Somewhere a finished [`ValidationResult`] can be sent.
pub trait Publisher {
    fn publish(&self, result: &ValidationResult) -> Result<(), ArmoryError>;
}

/// Serializes the envelope the way the reporter reads it.
pub fn to_json(result: &ValidationResult) -> Result<String, ArmoryError> {
    Ok(serde_json::to_string(result)?)
}

/// Publishes through the external reporter binary.
#[derive(Debug, Clone)]
pub struct MarvinPublisher {
    binary: PathBuf,
    flag: String,
}

impl MarvinPublisher {
    pub fn new(binary: impl Into<PathBuf>, flag: impl Into<String>) -> Self {
        MarvinPublisher {
            binary: binary.into(),
            flag: flag.into(),
        }
    }

    pub fn from_config(config: &PublishConfig) -> Self {
        MarvinPublisher::new(&config.binary, &config.flag)
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Publisher for MarvinPublisher {
    fn publish(&self, result: &ValidationResult) -> Result<(), ArmoryError> {
        let json = to_json(result)?;

        let mut file = tempfile::Builder::new()
            .prefix("armory-")
            .suffix(".json")
            .tempfile()
            .map_err(ArmoryError::TempFile)?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.flush())
            .map_err(ArmoryError::TempFile)?;
        // Closing the handle keeps the path alive until `report` is dropped.
        let report = file.into_temp_path();

        // The reporter signals its own failures; only a failed spawn matters here.
        Command::new(&self.binary)
            .arg(&self.flag)
            .arg(report.as_os_str())
            .status()
            .map_err(|source| ArmoryError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        Ok(())
    }
}

/// Writes the envelope to a fixed path instead of invoking the reporter.
#[derive(Debug, Clone)]
pub struct FilePublisher {
    path: PathBuf,
}

impl FilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePublisher { path: path.into() }
    }
}

impl Publisher for FilePublisher {
    fn publish(&self, result: &ValidationResult) -> Result<(), ArmoryError> {
        let json = to_json(result)?;
        std::fs::write(&self.path, json).map_err(|source| ArmoryError::WriteOutput {
            path: self.path.clone(),
            source,
        })
    }
}
