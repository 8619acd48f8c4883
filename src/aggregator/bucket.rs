//! Observations and their grouping by category.

use super::summary::{compute_summary, StatSummary};
use crate::utils::config::UNLABELLED_CATEGORY;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single recorded numeric sample
///
/// Interaction timings carry a category label (e.g. "hover-sequential"),
/// frame-rate samples usually don't.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Duration in milliseconds, or frames per second
    pub value: f64,
}

impl Observation {
    /// Create a labelled observation
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    /// Create an observation without a category
    pub fn unlabelled(value: f64) -> Self {
        Self { label: None, value }
    }

    /// Bucket key for this observation
    pub fn category(&self) -> &str {
        self.label.as_deref().unwrap_or(UNLABELLED_CATEGORY)
    }
}

/// Observations grouped by category label
///
/// Key order is unspecified; use [`summarize_buckets`] for a sorted view.
pub type PatternBucket = HashMap<String, Vec<Observation>>;

/// Group observations by label
///
/// **Public** - categories are discovered from the data
///
/// Each bucket keeps the insertion order of its observations, and every
/// input observation lands in exactly one bucket.
pub fn partition_by_category(observations: &[Observation]) -> PatternBucket {
    let mut buckets = PatternBucket::new();

    for observation in observations {
        buckets
            .entry(observation.category().to_string())
            .or_default()
            .push(observation.clone());
    }

    buckets
}

/// Summarize every bucket
///
/// **Public** - returns a sorted map so reports and JSON are stable
pub fn summarize_buckets(buckets: &PatternBucket) -> BTreeMap<String, StatSummary> {
    buckets
        .iter()
        .map(|(category, observations)| {
            (category.clone(), compute_summary(observations, |o| o.value))
        })
        .collect()
}
