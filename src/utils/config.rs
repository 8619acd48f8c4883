//! Configuration and constants for the library and CLI.

/// Current results/analysis schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// FPS classification cutoffs (average frames per second)
pub const DEFAULT_SMOOTH_FPS: f64 = 50.0;
pub const DEFAULT_ACCEPTABLE_FPS: f64 = 30.0;

/// Ceiling for a single category's average duration, in milliseconds
pub const DEFAULT_CATEGORY_CEILING_MS: f64 = 2000.0;

/// Heap usage (used / limit) above which memory is flagged
pub const DEFAULT_MAX_HEAP_USAGE_PERCENT: f64 = 80.0;

/// Bucket name for observations recorded without a label
pub const UNLABELLED_CATEGORY: &str = "unlabelled";

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Default directory for results, analysis and log artifacts
pub const DEFAULT_RESULTS_DIR: &str = "results";

// Video compression
pub const COMPRESSED_MARKER: &str = "compressed";
pub const VIDEO_EXTENSION: &str = "mp4";
pub const ORIGINAL_SUFFIX: &str = "_original";
pub const TEMP_SUFFIX: &str = "_temp";
pub const DEFAULT_CRF: u8 = 18;
pub const DEFAULT_PRESET: &str = "slow";
