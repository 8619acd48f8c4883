//! Output JSON schema definitions for run results.
//!
//! This module defines the structure of result files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{Observation, StatSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full output of one measurement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Schema version for compatibility checking
    pub version: String,

    /// Scenario name (e.g. "interaction-performance")
    pub scenario: String,

    /// Timestamp when the result was assembled
    pub generated_at: String,

    /// Configuration the producer ran with
    pub config: RunConfig,

    /// Wall-clock time of the whole run
    pub total_time: TotalTime,

    /// Interaction timings
    pub interactions: InteractionStats,

    /// Frame-rate samples
    pub fps: FpsStats,

    /// Heap snapshot taken at the end of the run
    pub memory: Option<MemorySnapshot>,
}

/// Configuration echo from the producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Page under test
    #[serde(default)]
    pub url: String,

    /// Free-form note attached to the run
    #[serde(default)]
    pub comment: String,

    /// CPU slowdown factor (1 = none)
    #[serde(default = "default_cpu_throttling")]
    pub cpu_throttling: u32,

    /// Scenario-specific settings (rounds, resize counts, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_cpu_throttling() -> u32 {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            comment: String::new(),
            cpu_throttling: default_cpu_throttling(),
            extra: BTreeMap::new(),
        }
    }
}

/// Elapsed wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalTime {
    pub ms: u64,
    pub seconds: f64,
}

impl TotalTime {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            ms,
            seconds: ms as f64 / 1000.0,
        }
    }
}

/// Interaction statistics for the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionStats {
    /// Number of individual UI actions performed
    pub total: u64,

    /// Summary over every recorded batch duration
    pub summary: StatSummary,

    /// Summary per category label
    pub patterns: BTreeMap<String, StatSummary>,

    /// Raw observations in recording order
    pub details: Vec<Observation>,
}

/// Frame-rate statistics for the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpsStats {
    pub summary: StatSummary,

    /// Samples in recording order
    pub history: Vec<f64>,
}

/// JS heap snapshot in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    #[serde(alias = "usedJSHeapSize")]
    pub used: u64,

    #[serde(alias = "totalJSHeapSize")]
    pub total: u64,

    #[serde(alias = "jsHeapSizeLimit")]
    pub limit: u64,
}

impl MemorySnapshot {
    pub fn new(used: u64, total: u64, limit: u64) -> Self {
        Self { used, total, limit }
    }

    /// Check the `used <= total <= limit` ordering
    pub fn is_consistent(&self) -> bool {
        self.used <= self.total && self.total <= self.limit
    }
}
