//! Aggregation of recorded observations into summary statistics.
//!
//! This module provides:
//! - A single generic reduction (average/min/max/count)
//! - Grouping of labelled observations into per-category buckets
//! - Per-category summaries

pub mod bucket;
pub mod summary;

// Re-export main types and functions
pub use bucket::{partition_by_category, summarize_buckets, Observation, PatternBucket};
pub use summary::{compute_summary, StatSummary};
