//! Qualitative analysis of run results.
//!
//! Classifies frame rate, flags slow interaction categories and heap
//! pressure, and rolls everything up into a single status.

use super::schema::{
    Analysis, AnalysisStatus, CategoryFlag, FpsAnalysis, FpsVerdict, MemoryAnalysis, Severity,
    ThresholdViolation,
};
use super::thresholds::{DurationThresholds, FpsThresholds, MemoryThresholds, ThresholdConfig};
use crate::aggregator::StatSummary;
use crate::run::{MemorySnapshot, RunResult};
use crate::utils::config::BYTES_PER_MB;
use std::collections::BTreeMap;

/// Analyze a run result against thresholds
///
/// **Public** - main entry point for analysis
///
/// Pure: the result is only borrowed, and the same inputs always produce
/// the same [`Analysis`].
///
/// # Example
/// ```ignore
/// let thresholds = load_thresholds("thresholds.toml")?;
/// let analysis = analyze_run(&result, &thresholds);
/// ```
pub fn analyze_run(result: &RunResult, config: &ThresholdConfig) -> Analysis {
    let mut violations = Vec::new();

    let fps = analyze_fps(&result.fps.summary, &config.fps, &mut violations);

    check_overall_duration(
        &result.interactions.summary,
        &config.interactions,
        &mut violations,
    );

    let slow_categories = flag_slow_categories(
        &result.interactions.patterns,
        &config.interactions,
        &mut violations,
    );

    let memory = result
        .memory
        .as_ref()
        .map(|snapshot| analyze_memory(snapshot, &config.memory, &mut violations));

    let status = status_for(&violations);

    Analysis {
        fps,
        slow_categories,
        memory,
        violations,
        status,
    }
}

/// Classify an FPS summary
///
/// An empty summary is `InsufficientData`; its zero sentinel is never
/// compared against the cutoffs.
pub fn fps_verdict(summary: &StatSummary, thresholds: &FpsThresholds) -> FpsVerdict {
    if !summary.has_data() {
        FpsVerdict::InsufficientData
    } else if summary.average >= thresholds.smooth_min {
        FpsVerdict::Smooth
    } else if summary.average >= thresholds.acceptable_min {
        FpsVerdict::Acceptable
    } else {
        FpsVerdict::Poor
    }
}

fn analyze_fps(
    summary: &StatSummary,
    thresholds: &FpsThresholds,
    violations: &mut Vec<ThresholdViolation>,
) -> FpsAnalysis {
    let verdict = fps_verdict(summary, thresholds);

    match verdict {
        FpsVerdict::Acceptable => violations.push(ThresholdViolation {
            metric: "fps.smooth_min".to_string(),
            threshold: thresholds.smooth_min,
            actual: summary.average,
            severity: Severity::Warning,
        }),
        FpsVerdict::Poor => violations.push(ThresholdViolation {
            metric: "fps.acceptable_min".to_string(),
            threshold: thresholds.acceptable_min,
            actual: summary.average,
            severity: Severity::Error,
        }),
        FpsVerdict::Smooth | FpsVerdict::InsufficientData => {}
    }

    FpsAnalysis {
        verdict,
        average: summary.average,
        minimum: summary.minimum,
        samples: summary.count,
    }
}

fn check_overall_duration(
    summary: &StatSummary,
    thresholds: &DurationThresholds,
    violations: &mut Vec<ThresholdViolation>,
) {
    if let Some(max_average) = thresholds.max_average_ms {
        if summary.has_data() && summary.average > max_average {
            violations.push(ThresholdViolation {
                metric: "interactions.max_average_ms".to_string(),
                threshold: max_average,
                actual: summary.average,
                severity: Severity::Error,
            });
        }
    }
}

fn flag_slow_categories(
    patterns: &BTreeMap<String, StatSummary>,
    thresholds: &DurationThresholds,
    violations: &mut Vec<ThresholdViolation>,
) -> Vec<CategoryFlag> {
    let mut flags = Vec::new();

    for (category, summary) in patterns {
        let ceiling = thresholds.ceiling_for(category);
        if !summary.has_data() || summary.average <= ceiling {
            continue;
        }

        violations.push(ThresholdViolation {
            metric: format!("interactions.categories.{}", category),
            threshold: ceiling,
            actual: summary.average,
            severity: Severity::Warning,
        });

        flags.push(CategoryFlag {
            category: category.clone(),
            average_ms: summary.average,
            ceiling_ms: ceiling,
            count: summary.count,
        });
    }

    flags
}

fn analyze_memory(
    snapshot: &MemorySnapshot,
    thresholds: &MemoryThresholds,
    violations: &mut Vec<ThresholdViolation>,
) -> MemoryAnalysis {
    let usage_percent = if snapshot.limit > 0 {
        Some(snapshot.used as f64 * 100.0 / snapshot.limit as f64)
    } else {
        None
    };

    let within_limit = usage_percent
        .map(|percent| percent <= thresholds.max_heap_usage_percent)
        .unwrap_or(true);

    if let (false, Some(percent)) = (within_limit, usage_percent) {
        violations.push(ThresholdViolation {
            metric: "memory.max_heap_usage_percent".to_string(),
            threshold: thresholds.max_heap_usage_percent,
            actual: percent,
            severity: Severity::Warning,
        });
    }

    MemoryAnalysis {
        used_mb: snapshot.used as f64 / BYTES_PER_MB,
        usage_percent,
        within_limit,
    }
}

/// Roll violations up into an overall status
fn status_for(violations: &[ThresholdViolation]) -> AnalysisStatus {
    if violations.iter().any(|v| v.severity == Severity::Error) {
        AnalysisStatus::Failed
    } else if !violations.is_empty() {
        AnalysisStatus::Warning
    } else {
        AnalysisStatus::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Observation;
    use crate::run::{build_run_result, RunCapture};

    fn result_with(fps: Vec<f64>, observations: Vec<Observation>) -> RunResult {
        let capture = RunCapture {
            elapsed_ms: 1000,
            observations,
            fps_samples: fps,
            ..Default::default()
        };
        build_run_result("test", &capture)
    }

    #[test]
    fn test_smooth_fps() {
        let result = result_with(vec![58.0, 60.0, 55.0], vec![]);
        let analysis = analyze_run(&result, &ThresholdConfig::default());

        assert_eq!(analysis.fps.verdict, FpsVerdict::Smooth);
        assert_eq!(analysis.fps.samples, 3);
        assert_eq!(analysis.status, AnalysisStatus::Passed);
    }

    #[test]
    fn test_empty_fps_is_insufficient_not_poor() {
        let result = result_with(vec![], vec![]);
        let analysis = analyze_run(&result, &ThresholdConfig::default());

        assert_eq!(analysis.fps.verdict, FpsVerdict::InsufficientData);
        assert!(analysis.violations.is_empty());
        assert_eq!(analysis.status, AnalysisStatus::Passed);
    }

    #[test]
    fn test_fps_verdict_boundaries() {
        let thresholds = FpsThresholds::default();

        let at_smooth = StatSummary::from_values(&[50.0]);
        let at_acceptable = StatSummary::from_values(&[30.0]);
        let below = StatSummary::from_values(&[29.9]);

        assert_eq!(fps_verdict(&at_smooth, &thresholds), FpsVerdict::Smooth);
        assert_eq!(fps_verdict(&at_acceptable, &thresholds), FpsVerdict::Acceptable);
        assert_eq!(fps_verdict(&below, &thresholds), FpsVerdict::Poor);
    }

    #[test]
    fn test_poor_fps_fails() {
        let result = result_with(vec![20.0, 25.0], vec![]);
        let analysis = analyze_run(&result, &ThresholdConfig::default());

        assert_eq!(analysis.fps.verdict, FpsVerdict::Poor);
        assert_eq!(analysis.violations.len(), 1);
        assert_eq!(analysis.violations[0].metric, "fps.acceptable_min");
        assert_eq!(analysis.violations[0].severity, Severity::Error);
        assert_eq!(analysis.status, AnalysisStatus::Failed);
    }

    #[test]
    fn test_acceptable_fps_warns() {
        let result = result_with(vec![40.0], vec![]);
        let analysis = analyze_run(&result, &ThresholdConfig::default());

        assert_eq!(analysis.fps.verdict, FpsVerdict::Acceptable);
        assert_eq!(analysis.status, AnalysisStatus::Warning);
    }

    #[test]
    fn test_slow_category_flagged() {
        let mut config = ThresholdConfig::default();
        config
            .interactions
            .categories
            .insert("activate-all".to_string(), 500.0);

        let result = result_with(
            vec![60.0],
            vec![
                Observation::new("activate-all", 700.0),
                Observation::new("hover-zigzag", 300.0),
            ],
        );
        let analysis = analyze_run(&result, &config);

        assert_eq!(analysis.slow_categories.len(), 1);
        assert_eq!(analysis.slow_categories[0].category, "activate-all");
        assert_eq!(analysis.slow_categories[0].ceiling_ms, 500.0);
        assert_eq!(analysis.status, AnalysisStatus::Warning);
    }

    #[test]
    fn test_overall_average_ceiling() {
        let mut config = ThresholdConfig::default();
        config.interactions.max_average_ms = Some(100.0);

        let result = result_with(vec![60.0], vec![Observation::new("resize", 150.0)]);
        let analysis = analyze_run(&result, &config);

        assert_eq!(analysis.violations[0].metric, "interactions.max_average_ms");
        assert_eq!(analysis.status, AnalysisStatus::Failed);
    }

    #[test]
    fn test_memory_pressure() {
        let mut result = result_with(vec![60.0], vec![]);
        result.memory = Some(MemorySnapshot::new(90, 95, 100));

        let analysis = analyze_run(&result, &ThresholdConfig::default());
        let memory = analysis.memory.unwrap();

        assert_eq!(memory.usage_percent, Some(90.0));
        assert!(!memory.within_limit);
        assert_eq!(analysis.status, AnalysisStatus::Warning);
    }

    #[test]
    fn test_memory_without_limit() {
        let mut result = result_with(vec![60.0], vec![]);
        result.memory = Some(MemorySnapshot::new(10, 0, 0));

        let analysis = analyze_run(&result, &ThresholdConfig::default());
        let memory = analysis.memory.unwrap();

        assert_eq!(memory.usage_percent, None);
        assert!(memory.within_limit);
        assert!(analysis.violations.is_empty());
    }

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(&[]), AnalysisStatus::Passed);

        let warning = ThresholdViolation {
            metric: "test".to_string(),
            threshold: 10.0,
            actual: 20.0,
            severity: Severity::Warning,
        };
        let error = ThresholdViolation {
            severity: Severity::Error,
            ..warning.clone()
        };

        assert_eq!(status_for(&[warning.clone()]), AnalysisStatus::Warning);
        assert_eq!(status_for(&[warning, error]), AnalysisStatus::Failed);
    }
}
