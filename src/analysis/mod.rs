//! Run analysis and threshold checking.
//!
//! This module turns a [`RunResult`](crate::run::RunResult) into a
//! qualitative [`Analysis`] using explicit, configurable thresholds.
//!
//! # Example
//! ```ignore
//! use perfscope::analysis::{analyze_run, load_thresholds};
//! use perfscope::output::read_run_result;
//!
//! let result = read_run_result("results/interaction-performance.json")?;
//! let thresholds = load_thresholds("thresholds.toml")?;
//! let analysis = analyze_run(&result, &thresholds);
//! ```

mod analyzer;
mod schema;
mod thresholds;

// Public API exports
pub use analyzer::{analyze_run, fps_verdict};
pub use schema::{
    Analysis, AnalysisStatus, CategoryFlag, FpsAnalysis, FpsVerdict, MemoryAnalysis, Severity,
    ThresholdViolation,
};
pub use thresholds::{
    load_thresholds, parse_thresholds, DurationThresholds, FpsThresholds, MemoryThresholds,
    ThresholdConfig,
};
