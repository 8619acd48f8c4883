//! Output writers for run results, analyses and logs.
//!
//! This module handles writing data to disk:
//! - JSON run results and analysis records
//! - Appended plain-text run logs

pub mod json;
pub mod logfile;

// Re-export main functions
pub use json::{
    read_capture, read_run_result, write_analysis, write_run_result, AnalysisRecord,
};
pub use logfile::{append_to_log, run_summary_text};

use crate::utils::error::OutputError;
use log::debug;
use std::path::{Path, PathBuf};

/// File locations for one persisted run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub results: PathBuf,
    pub analysis: PathBuf,
    pub log: PathBuf,
}

/// Lay out artifact paths under `dir`
///
/// Results and analysis get a timestamped name so runs never overwrite
/// each other; the log is shared per scenario.
pub fn artifact_paths(dir: &Path, scenario: &str, timestamp: &str) -> ArtifactPaths {
    ArtifactPaths {
        results: dir.join(format!("{}-{}.json", scenario, timestamp)),
        analysis: dir.join(format!("{}-analysis-{}.json", scenario, timestamp)),
        log: dir.join(format!("{}.log", scenario)),
    }
}

/// File-name friendly timestamp for the current moment
pub fn file_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
