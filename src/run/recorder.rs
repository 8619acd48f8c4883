//! Producer-side accumulator for scenario drivers linking this crate.

use super::builder::{build_run_result, is_usable_duration, is_usable_fps};
use super::capture::RunCapture;
use super::schema::{MemorySnapshot, RunConfig, RunResult};
use crate::aggregator::Observation;
use log::debug;
use std::time::Instant;

/// Collects observations while a scenario runs
///
/// # Example
/// ```ignore
/// let mut recorder = RunRecorder::new("interaction-performance", config);
/// recorder.measure("hover-sequential", rect_count, || hover_all(&page));
/// recorder.record_fps(page_fps);
/// let result = recorder.finish(memory);
/// ```
#[derive(Debug)]
pub struct RunRecorder {
    scenario: String,
    started: Instant,
    capture: RunCapture,
    interactions: u64,
}

impl RunRecorder {
    pub fn new(scenario: impl Into<String>, config: RunConfig) -> Self {
        Self {
            scenario: scenario.into(),
            started: Instant::now(),
            capture: RunCapture {
                config,
                ..Default::default()
            },
            interactions: 0,
        }
    }

    /// Record a timed batch under a category; non-finite durations are dropped
    pub fn record(&mut self, label: impl Into<String>, duration_ms: f64) {
        let label: String = label.into();
        if !is_usable_duration(duration_ms) {
            debug!("Dropping {} duration {}", label, duration_ms);
            return;
        }
        self.capture
            .observations
            .push(Observation::new(label, duration_ms));
    }

    /// Time `action`, record it under `label` and count its interactions
    pub fn measure<T>(
        &mut self,
        label: impl Into<String>,
        interactions: u64,
        action: impl FnOnce() -> T,
    ) -> T {
        let start = Instant::now();
        let output = action();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let label: String = label.into();
        debug!("{}: {:.2}ms ({} interactions)", label, elapsed_ms, interactions);

        self.record(label, elapsed_ms);
        self.add_interactions(interactions);
        output
    }

    /// Record a frame-rate sample; pages that report no FPS are skipped
    pub fn record_fps(&mut self, fps: f64) {
        if is_usable_fps(fps) {
            self.capture.fps_samples.push(fps);
        }
    }

    pub fn add_interactions(&mut self, count: u64) {
        self.interactions += count;
    }

    pub fn observations(&self) -> &[Observation] {
        &self.capture.observations
    }

    pub fn fps_samples(&self) -> &[f64] {
        &self.capture.fps_samples
    }

    /// Finish the run using the wall-clock time since [`RunRecorder::new`]
    pub fn finish(self, memory: Option<MemorySnapshot>) -> RunResult {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.finish_with_elapsed(elapsed_ms, memory)
    }

    /// Finish the run with an externally measured duration
    pub fn finish_with_elapsed(
        mut self,
        elapsed_ms: u64,
        memory: Option<MemorySnapshot>,
    ) -> RunResult {
        self.capture.elapsed_ms = elapsed_ms;
        self.capture.memory = memory;
        self.capture.interaction_count = Some(self.interactions);
        build_run_result(&self.scenario, &self.capture)
    }
}
