//! Summary statistics over numeric samples.
//!
//! Every reduction in the crate (overall interactions, per-pattern
//! durations, FPS samples) goes through [`compute_summary`].

use serde::{Deserialize, Serialize};

/// Average/min/max/count over a sample set
///
/// An empty sample set yields the all-zero sentinel. Callers must check
/// [`StatSummary::has_data`] before dividing by any of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatSummary {
    /// Arithmetic mean
    pub average: f64,

    /// Smallest sample
    pub minimum: f64,

    /// Largest sample
    pub maximum: f64,

    /// Number of samples
    pub count: usize,
}

impl StatSummary {
    /// Summarize a plain slice of values
    pub fn from_values(values: &[f64]) -> Self {
        compute_summary(values, |v| *v)
    }

    /// Whether any sample contributed to this summary
    pub fn has_data(&self) -> bool {
        self.count > 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        if !self.has_data() {
            return "no data".to_string();
        }
        format!(
            "avg {:.2} | min {:.2} | max {:.2} | n={}",
            self.average, self.minimum, self.maximum, self.count
        )
    }
}

/// Reduce a sequence of records to a [`StatSummary`]
///
/// **Public** - main entry point for statistics
///
/// # Arguments
/// * `samples` - Records to summarize (may be empty)
/// * `value_of` - Extracts the numeric field of interest from a record
///
/// # Returns
/// Summary of the extracted values; the zero sentinel for empty input
///
/// # Example
/// ```ignore
/// let fps = compute_summary(&frames, |f| f.fps);
/// ```
pub fn compute_summary<T, F>(samples: &[T], value_of: F) -> StatSummary
where
    F: Fn(&T) -> f64,
{
    if samples.is_empty() {
        return StatSummary::default();
    }

    let mut sum = 0.0;
    let mut minimum = f64::INFINITY;
    let mut maximum = f64::NEG_INFINITY;

    for sample in samples {
        let value = value_of(sample);
        sum += value;
        minimum = minimum.min(value);
        maximum = maximum.max(value);
    }

    let count = samples.len();

    // Rounding in the sum can push the mean a hair outside the extrema
    // (e.g. three copies of 0.1), so pin it back into range.
    let average = (sum / count as f64).max(minimum).min(maximum);

    StatSummary {
        average,
        minimum,
        maximum,
        count,
    }
}
