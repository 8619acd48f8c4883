//! Run results: schema, construction and producer-side recording.
//!
//! Raw observations flow in through [`RunRecorder`] (in-process producers)
//! or [`RunCapture`] (JSON from external drivers) and leave as an
//! immutable [`RunResult`].

pub mod builder;
pub mod capture;
pub mod recorder;
pub mod schema;

// Re-export main types
pub use builder::{build_run_result, is_usable_duration, is_usable_fps};
pub use capture::RunCapture;
pub use recorder::RunRecorder;
pub use schema::{FpsStats, InteractionStats, MemorySnapshot, RunConfig, RunResult, TotalTime};
