//! Ingest command implementation.
//!
//! The ingest command:
//! 1. Reads a raw capture
//! 2. Aggregates it into a run result
//! 3. Analyzes the result against thresholds
//! 4. Writes results, analysis and log
//! 5. Prints the report

use super::models::IngestArgs;
use crate::analysis::{analyze_run, load_thresholds, Analysis, AnalysisStatus, ThresholdConfig};
use crate::output::{
    append_to_log, artifact_paths, file_timestamp, read_capture, run_summary_text,
    write_analysis, write_run_result, AnalysisRecord,
};
use crate::report::render_terminal_report;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the ingest command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The analysis of the ingested run
///
/// # Errors
/// * Unreadable or malformed capture
/// * Invalid threshold file
/// * File write errors
/// * FAILED status when `strict` is set
pub fn execute_ingest(args: IngestArgs) -> Result<Analysis> {
    let start_time = Instant::now();

    info!("Ingesting {} capture from: {}", args.scenario, args.input.display());

    // Step 1: Read capture
    info!("Step 1/5: Reading capture...");
    let capture = read_capture(&args.input).context("Failed to read capture JSON")?;

    // Step 2: Aggregate
    info!("Step 2/5: Aggregating observations...");
    let result = capture.into_run_result(&args.scenario);

    debug!("Interactions: {}", result.interactions.summary.summary());
    debug!("FPS: {}", result.fps.summary.summary());

    // Step 3: Analyze
    info!("Step 3/5: Analyzing against thresholds...");
    let thresholds = resolve_thresholds(args.thresholds.as_deref())?;
    let analysis = analyze_run(&result, &thresholds);

    info!(
        "FPS verdict: {} | {} violations | status {}",
        analysis.fps.verdict,
        analysis.violations.len(),
        analysis.status
    );

    // Step 4: Persist
    if args.save {
        info!("Step 4/5: Writing artifacts...");
        let paths = artifact_paths(&args.results_dir, &args.scenario, &file_timestamp());

        write_run_result(&result, &paths.results).context("Failed to write results JSON")?;
        info!("✓ Results written to: {}", paths.results.display());

        let record = AnalysisRecord::new(args.scenario.as_str(), analysis.clone());
        write_analysis(&record, &paths.analysis).context("Failed to write analysis JSON")?;
        info!("✓ Analysis written to: {}", paths.analysis.display());

        append_to_log(
            &paths.log,
            &args.scenario,
            &run_summary_text(&result, &analysis),
        )
        .context("Failed to append to run log")?;
    } else {
        info!("Step 4/5: Skipping artifacts (not requested)");
    }

    // Step 5: Report
    if args.print_summary {
        println!("{}", render_terminal_report(&result, &analysis));
    }

    info!("Ingest completed in {:.2}s", start_time.elapsed().as_secs_f64());

    if args.strict && analysis.status == AnalysisStatus::Failed {
        anyhow::bail!("Run failed thresholds ({} violations)", analysis.violations.len());
    }

    Ok(analysis)
}

/// Load thresholds from `path`, or the defaults when none is given
pub fn resolve_thresholds(path: Option<&Path>) -> Result<ThresholdConfig> {
    match path {
        Some(path) => {
            info!("Loading thresholds from: {}", path.display());
            load_thresholds(path)
                .with_context(|| format!("Failed to load thresholds from {}", path.display()))
        }
        None => Ok(ThresholdConfig::default()),
    }
}

/// Validate ingest arguments
///
/// **Public** - can be called before execute_ingest for early validation
pub fn validate_ingest_args(args: &IngestArgs) -> Result<()> {
    if args.scenario.is_empty() {
        anyhow::bail!("Scenario name cannot be empty");
    }

    // The name ends up in file names
    if !args
        .scenario
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        anyhow::bail!("Scenario name may only contain letters, digits, '-' and '_'");
    }

    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    Ok(())
}
