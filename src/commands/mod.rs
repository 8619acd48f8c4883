//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod compress;
pub mod ingest;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::execute_analyze;
pub use compress::{execute_compress, render_compression_summary, validate_compress_args};
pub use ingest::{execute_ingest, resolve_thresholds, validate_ingest_args};
pub use models::{AnalyzeArgs, CompressArgs, IngestArgs};
pub use utils::{display_schema, display_version, validate_result_file};
