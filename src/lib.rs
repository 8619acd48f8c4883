//! Perfscope
//!
//! Statistics aggregation, threshold analysis and reporting for UI
//! performance runs, plus an idempotent video compression helper.
//!
//! Scenario drivers record timed observations (directly through
//! [`run::RunRecorder`] or as capture JSON), which are reduced into a
//! [`run::RunResult`], analyzed with [`analysis::analyze_run`] and
//! persisted by [`output`].

pub mod aggregator;
pub mod analysis;
pub mod commands;
pub mod compress;
pub mod output;
pub mod report;
pub mod run;
pub mod utils;
