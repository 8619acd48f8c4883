//! JSON output writer.
//!
//! Writes run results and analyses to JSON files with proper formatting,
//! and reads results and raw captures back.

use crate::analysis::Analysis;
use crate::run::{RunCapture, RunResult};
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Persisted form of an analysis
///
/// The timestamp lives here rather than in [`Analysis`] so that analyzing
/// the same result twice still compares equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub scenario: String,
    pub generated_at: String,
    pub analysis: Analysis,
}

impl AnalysisRecord {
    /// Wrap an analysis with the current time
    pub fn new(scenario: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            scenario: scenario.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            analysis,
        }
    }
}

/// Write a run result to a JSON file
///
/// **Public** - main entry point for result output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let result = recorder.finish(memory);
/// write_run_result(&result, "results/interaction-performance.json")?;
/// ```
pub fn write_run_result(result: &RunResult, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    info!("Writing {} results", result.scenario);
    write_json(result, output_path.as_ref())
}

/// Write an analysis record to a JSON file
pub fn write_analysis(record: &AnalysisRecord, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    info!("Writing {} analysis", record.scenario);
    write_json(record, output_path.as_ref())
}

/// Read a run result from a JSON file
///
/// **Public** - useful for validation, re-analysis and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_run_result(input_path: impl AsRef<Path>) -> Result<RunResult, OutputError> {
    let result: RunResult = read_json(input_path.as_ref())?;

    debug!(
        "Result loaded: version {}, scenario {}",
        result.version, result.scenario
    );

    Ok(result)
}

/// Read a raw producer capture from a JSON file
pub fn read_capture(input_path: impl AsRef<Path>) -> Result<RunCapture, OutputError> {
    let capture: RunCapture = read_json(input_path.as_ref())?;

    debug!(
        "Capture loaded: {} observations, {} fps samples",
        capture.observations.len(),
        capture.fps_samples.len()
    );

    Ok(capture)
}

fn write_json<T: Serialize>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    info!("Writing JSON to: {}", output_path.display());

    // Validate path
    super::validate_path(output_path)?;

    // Create parent directories if needed
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    info!(
        "Written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

fn read_json<T: DeserializeOwned>(input_path: &Path) -> Result<T, OutputError> {
    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
