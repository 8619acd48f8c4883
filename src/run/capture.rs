//! Raw producer output, before aggregation.

use super::builder::build_run_result;
use super::schema::{MemorySnapshot, RunConfig, RunResult};
use crate::aggregator::Observation;
use serde::{Deserialize, Serialize};

/// Everything a scenario driver collected during one run
///
/// Producers that don't link against this crate write this shape as JSON
/// and hand it to the `ingest` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunCapture {
    #[serde(default)]
    pub config: RunConfig,

    /// Wall-clock time of the run
    pub elapsed_ms: u64,

    /// Individual UI actions performed; defaults to the observation count
    #[serde(default)]
    pub interaction_count: Option<u64>,

    /// Timed interaction batches
    #[serde(default)]
    pub observations: Vec<Observation>,

    /// Frame-rate samples
    #[serde(default)]
    pub fps_samples: Vec<f64>,

    #[serde(default)]
    pub memory: Option<MemorySnapshot>,
}

impl RunCapture {
    /// Aggregate this capture into a [`RunResult`]
    pub fn into_run_result(self, scenario: &str) -> RunResult {
        build_run_result(scenario, &self)
    }
}
