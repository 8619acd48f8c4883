//! Assembly of a [`RunResult`] from collected observations.

use super::capture::RunCapture;
use super::schema::{FpsStats, InteractionStats, RunResult, TotalTime};
use crate::aggregator::{
    compute_summary, partition_by_category, summarize_buckets, Observation, StatSummary,
};
use crate::utils::config::SCHEMA_VERSION;
use log::{debug, warn};

/// Build the result of one run
///
/// **Public** - single construction point for run results
///
/// # Arguments
/// * `scenario` - Scenario name echoed into the result
/// * `capture` - Everything the producer collected
///
/// # Returns
/// Aggregated run result, ready for analysis and persistence
pub fn build_run_result(scenario: &str, capture: &RunCapture) -> RunResult {
    let observations: Vec<Observation> = capture
        .observations
        .iter()
        .filter(|o| is_usable_duration(o.value))
        .cloned()
        .collect();

    if observations.len() != capture.observations.len() {
        debug!(
            "Dropped {} non-finite durations",
            capture.observations.len() - observations.len()
        );
    }

    let summary = compute_summary(&observations, |o| o.value);
    let patterns = summarize_buckets(&partition_by_category(&observations));

    debug!(
        "Aggregated {} observations into {} patterns",
        observations.len(),
        patterns.len()
    );

    let history: Vec<f64> = capture
        .fps_samples
        .iter()
        .copied()
        .filter(|fps| is_usable_fps(*fps))
        .collect();

    if history.len() != capture.fps_samples.len() {
        debug!(
            "Dropped {} unusable FPS samples",
            capture.fps_samples.len() - history.len()
        );
    }

    if let Some(memory) = &capture.memory {
        if !memory.is_consistent() {
            warn!(
                "Memory snapshot out of order: used={} total={} limit={}",
                memory.used, memory.total, memory.limit
            );
        }
    }

    let recorded = observations.len() as u64;

    RunResult {
        version: SCHEMA_VERSION.to_string(),
        scenario: scenario.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        config: capture.config.clone(),
        total_time: TotalTime::from_millis(capture.elapsed_ms),
        interactions: InteractionStats {
            total: capture.interaction_count.unwrap_or(recorded),
            summary,
            patterns,
            details: observations,
        },
        fps: FpsStats {
            summary: StatSummary::from_values(&history),
            history,
        },
        memory: capture.memory,
    }
}

/// Durations that can't be serialized as JSON numbers are dropped
pub fn is_usable_duration(duration_ms: f64) -> bool {
    duration_ms.is_finite()
}

/// A frame-rate sample counts only when the page actually reported one
pub fn is_usable_fps(fps: f64) -> bool {
    fps.is_finite() && fps > 0.0
}
