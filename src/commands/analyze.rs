//! Analyze command implementation.
//! Re-analyzes a persisted run result, e.g. after tightening thresholds.

use super::ingest::resolve_thresholds;
use super::models::AnalyzeArgs;
use crate::analysis::{analyze_run, Analysis, AnalysisStatus};
use crate::output::{read_run_result, write_analysis, AnalysisRecord};
use crate::report::render_terminal_report;
use anyhow::{Context, Result};
use log::info;

/// Execute the analyze command
pub fn execute_analyze(args: AnalyzeArgs) -> Result<Analysis> {
    // Step 1: Load result
    let result = read_run_result(&args.file).context("Failed to read run result")?;

    // Step 2: Analyze
    let thresholds = resolve_thresholds(args.thresholds.as_deref())?;
    let analysis = analyze_run(&result, &thresholds);

    // Step 3: Write output if requested
    if let Some(path) = &args.output {
        let record = AnalysisRecord::new(result.scenario.as_str(), analysis.clone());
        write_analysis(&record, path).context("Failed to write analysis JSON")?;
        info!("✓ Analysis written to: {}", path.display());
    }

    // Step 4: Terminal report
    println!("{}", render_terminal_report(&result, &analysis));

    if args.strict && analysis.status == AnalysisStatus::Failed {
        anyhow::bail!("Run failed thresholds ({} violations)", analysis.violations.len());
    }

    Ok(analysis)
}
