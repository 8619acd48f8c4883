//! Schema definitions for run analyses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative verdict derived from a [`RunResult`](crate::run::RunResult)
///
/// Carries no timestamps or counters: analyzing the same result twice
/// yields equal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub fps: FpsAnalysis,

    /// Categories whose average duration exceeds their ceiling, by name
    pub slow_categories: Vec<CategoryFlag>,

    /// Heap pressure, when the run reported memory
    pub memory: Option<MemoryAnalysis>,

    pub violations: Vec<ThresholdViolation>,

    pub status: AnalysisStatus,
}

/// Frame-rate classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FpsAnalysis {
    pub verdict: FpsVerdict,
    pub average: f64,
    pub minimum: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FpsVerdict {
    Smooth,
    Acceptable,
    Poor,
    /// No samples were collected
    InsufficientData,
}

impl fmt::Display for FpsVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FpsVerdict::Smooth => "smooth",
            FpsVerdict::Acceptable => "acceptable",
            FpsVerdict::Poor => "poor",
            FpsVerdict::InsufficientData => "insufficient data",
        };
        f.write_str(label)
    }
}

/// A category whose average duration exceeded its ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFlag {
    pub category: String,
    pub average_ms: f64,
    pub ceiling_ms: f64,
    pub count: usize,
}

/// Heap usage relative to the heap limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryAnalysis {
    pub used_mb: f64,

    /// `used / limit * 100`; `None` when the limit is unknown (0)
    pub usage_percent: Option<f64>,

    /// Whether usage stayed at or below the configured maximum
    pub within_limit: bool,
}

/// A single threshold violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdViolation {
    /// Name of the metric that violated threshold
    pub metric: String,

    /// Threshold value
    pub threshold: f64,

    /// Actual value
    pub actual: f64,

    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Overall outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalysisStatus {
    Passed,
    Warning,
    Failed,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnalysisStatus::Passed => "PASSED",
            AnalysisStatus::Warning => "WARNING",
            AnalysisStatus::Failed => "FAILED",
        };
        f.write_str(label)
    }
}
