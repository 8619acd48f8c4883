//! Threshold configuration.
//!
//! Loads threshold policies from TOML. Every section is optional and
//! falls back to the defaults in [`crate::utils::config`].
//!
//! ```toml
//! [fps]
//! smooth_min = 55.0
//! acceptable_min = 30.0
//!
//! [interactions]
//! max_category_average_ms = 1500.0
//! max_average_ms = 1000.0
//!
//! [interactions.categories]
//! rapid-toggle = 800.0
//!
//! [memory]
//! max_heap_usage_percent = 75.0
//! ```

use crate::utils::config::{
    DEFAULT_ACCEPTABLE_FPS, DEFAULT_CATEGORY_CEILING_MS, DEFAULT_MAX_HEAP_USAGE_PERCENT,
    DEFAULT_SMOOTH_FPS,
};
use crate::utils::error::ThresholdError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Complete threshold configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub fps: FpsThresholds,

    #[serde(default)]
    pub interactions: DurationThresholds,

    #[serde(default)]
    pub memory: MemoryThresholds,
}

/// Frame-rate cutoffs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FpsThresholds {
    /// Average at or above this is smooth
    pub smooth_min: f64,

    /// Average at or above this (and below `smooth_min`) is acceptable
    pub acceptable_min: f64,
}

impl Default for FpsThresholds {
    fn default() -> Self {
        Self {
            smooth_min: DEFAULT_SMOOTH_FPS,
            acceptable_min: DEFAULT_ACCEPTABLE_FPS,
        }
    }
}

/// Duration ceilings in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DurationThresholds {
    /// Ceiling for any category without an override
    pub max_category_average_ms: f64,

    /// Per-category ceilings
    pub categories: BTreeMap<String, f64>,

    /// Ceiling for the overall average; unchecked when absent
    pub max_average_ms: Option<f64>,
}

impl Default for DurationThresholds {
    fn default() -> Self {
        Self {
            max_category_average_ms: DEFAULT_CATEGORY_CEILING_MS,
            categories: BTreeMap::new(),
            max_average_ms: None,
        }
    }
}

impl DurationThresholds {
    /// Ceiling that applies to `category`
    pub fn ceiling_for(&self, category: &str) -> f64 {
        self.categories
            .get(category)
            .copied()
            .unwrap_or(self.max_category_average_ms)
    }
}

/// Heap usage limits
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MemoryThresholds {
    pub max_heap_usage_percent: f64,
}

impl Default for MemoryThresholds {
    fn default() -> Self {
        Self {
            max_heap_usage_percent: DEFAULT_MAX_HEAP_USAGE_PERCENT,
        }
    }
}

impl ThresholdConfig {
    /// Check that the cutoffs are usable
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let fps = &self.fps;
        if is_negative(fps.acceptable_min) || is_negative(fps.smooth_min) {
            return Err(ThresholdError::Invalid(
                "FPS thresholds must be non-negative".to_string(),
            ));
        }
        if fps.acceptable_min > fps.smooth_min {
            return Err(ThresholdError::Invalid(format!(
                "fps.acceptable_min ({}) is above fps.smooth_min ({})",
                fps.acceptable_min, fps.smooth_min
            )));
        }

        let durations = &self.interactions;
        let ceilings = std::iter::once((
            "max_category_average_ms",
            durations.max_category_average_ms,
        ))
        .chain(durations.categories.iter().map(|(k, v)| (k.as_str(), *v)))
        .chain(durations.max_average_ms.map(|v| ("max_average_ms", v)));
        for (name, value) in ceilings {
            if is_negative(value) {
                return Err(ThresholdError::Invalid(format!(
                    "interactions.{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if is_negative(self.memory.max_heap_usage_percent) {
            return Err(ThresholdError::Invalid(
                "memory.max_heap_usage_percent must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

// NaN is rejected along with negatives
fn is_negative(value: f64) -> bool {
    value.is_nan() || value < 0.0
}

/// Load thresholds from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Returns
/// Parsed and validated ThresholdConfig
///
/// # Errors
/// * `ThresholdError::IoError` - If file cannot be read
/// * `ThresholdError::ParseFailed` - If TOML is invalid
/// * `ThresholdError::Invalid` - If values are out of range
pub fn load_thresholds(path: impl AsRef<Path>) -> Result<ThresholdConfig, ThresholdError> {
    let contents = fs::read_to_string(path)?;
    parse_thresholds(&contents)
}

/// Parse thresholds from TOML text
pub fn parse_thresholds(contents: &str) -> Result<ThresholdConfig, ThresholdError> {
    let config: ThresholdConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
