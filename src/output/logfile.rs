//! Human-readable run log.
//!
//! Each run appends one timestamped block to `<scenario>.log`.

use crate::analysis::Analysis;
use crate::run::RunResult;
use crate::utils::config::BYTES_PER_MB;
use crate::utils::error::OutputError;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Build the multi-line summary appended to the log
pub fn run_summary_text(result: &RunResult, analysis: &Analysis) -> String {
    let interactions = &result.interactions;
    let fps = &result.fps.summary;

    let fps_line = if fps.has_data() {
        format!("{:.2} ({})", fps.average, analysis.fps.verdict)
    } else {
        format!("N/A ({})", analysis.fps.verdict)
    };

    let memory_mb = result
        .memory
        .map(|m| (m.used as f64 / BYTES_PER_MB).round() as u64)
        .unwrap_or(0);

    let comment = if result.config.comment.is_empty() {
        "N/A"
    } else {
        result.config.comment.as_str()
    };

    [
        format!("Interactions: {}", interactions.total),
        format!("Average duration: {:.2}ms", interactions.summary.average),
        format!("Average FPS: {}", fps_line),
        format!("Memory: {}MB", memory_mb),
        format!("Status: {}", analysis.status),
        format!("Comment: {}", comment),
    ]
    .join("\n")
}

/// Append a timestamped block to a log file
///
/// **Public** - creates the file (and parent directories) on first use
pub fn append_to_log(
    log_path: impl AsRef<Path>,
    scenario: &str,
    summary: &str,
) -> Result<(), OutputError> {
    let log_path = log_path.as_ref();

    super::validate_path(log_path)?;
    super::ensure_parent_dir(log_path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    writeln!(
        file,
        "=== {} | {} ===",
        chrono::Utc::now().to_rfc3339(),
        scenario
    )?;
    writeln!(file, "{}", summary.trim())?;
    writeln!(file)?;

    debug!("Appended summary to {}", log_path.display());

    Ok(())
}
