//! Terminal rendering for run reports.
//!
//! Provides a human-readable breakdown of one run with visual cues for
//! verdicts and threshold violations.

use crate::analysis::{Analysis, AnalysisStatus, FpsVerdict, Severity};
use crate::run::RunResult;
use crate::utils::config::BYTES_PER_MB;
use colored::*;

const WIDTH: usize = 80;

/// Render a human-readable report of a run for the terminal
pub fn render_terminal_report(result: &RunResult, analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str(&render_header(result));
    out.push_str(&render_total_time(result));
    out.push_str(&render_interactions(result));
    out.push_str(&render_patterns(result, analysis));
    out.push_str(&render_fps(result, analysis));
    out.push_str(&render_memory(result, analysis));
    out.push_str(&render_violations(analysis));
    out.push_str(&render_status(analysis));

    out
}

fn rule(ch: char) -> String {
    let mut line = ch.to_string().repeat(WIDTH);
    line.push('\n');
    line
}

fn section(title: &str) -> String {
    format!("{}\n{}", title.bold(), rule('─'))
}

fn render_header(result: &RunResult) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule('═'));
    out.push_str(&format!(
        "  {} {}\n",
        "PERFORMANCE REPORT:".bold(),
        result.scenario
    ));
    if !result.config.url.is_empty() {
        out.push_str(&format!("  URL: {}\n", result.config.url));
    }
    if result.config.cpu_throttling > 1 {
        out.push_str(&format!(
            "  CPU throttling: {}x slowdown\n",
            result.config.cpu_throttling
        ));
    }
    out.push_str(&rule('═'));
    out.push('\n');
    out
}

fn render_total_time(result: &RunResult) -> String {
    format!(
        "⏱️  {}  Test time: {:.2}s ({}ms)\n\n",
        section("TOTAL TIME"),
        result.total_time.seconds,
        result.total_time.ms
    )
}

fn render_interactions(result: &RunResult) -> String {
    let interactions = &result.interactions;
    let summary = &interactions.summary;

    let mut out = format!("🎮 {}", section("INTERACTIONS"));
    out.push_str(&format!("  Total interactions: {}\n", interactions.total));

    if summary.has_data() {
        out.push_str(&format!("  Average time:       {:.2}ms\n", summary.average));
        out.push_str(&format!(
            "  Min/Max:            {:.2}ms / {:.2}ms\n",
            summary.minimum, summary.maximum
        ));
    } else {
        out.push_str("  No timed interactions recorded\n");
    }
    out.push('\n');
    out
}

fn render_patterns(result: &RunResult, analysis: &Analysis) -> String {
    let patterns = &result.interactions.patterns;
    if patterns.is_empty() {
        return String::new();
    }

    let mut out = format!("📊 {}", section("BY PATTERN"));
    for (category, stats) in patterns {
        let icon = if category.contains("hover") { "🖱️ " } else { "👆" };
        let line = format!(
            "  {} {:<25} {:.2}ms ({}x)",
            icon, category, stats.average, stats.count
        );

        let flagged = analysis
            .slow_categories
            .iter()
            .any(|flag| &flag.category == category);

        if flagged {
            out.push_str(&format!("{} {}\n", line.yellow(), "slow".yellow().bold()));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

fn render_fps(result: &RunResult, analysis: &Analysis) -> String {
    let summary = &result.fps.summary;
    let mut out = format!("🎞️  {}", section("FPS"));

    if summary.has_data() {
        out.push_str(&format!("  Average FPS:       {:.2}\n", summary.average));
        out.push_str(&format!(
            "  Min/Max FPS:       {:.2} / {:.2}\n",
            summary.minimum, summary.maximum
        ));
    }

    let verdict = analysis.fps.verdict.to_string();
    let verdict = match analysis.fps.verdict {
        FpsVerdict::Smooth => verdict.green(),
        FpsVerdict::Acceptable => verdict.yellow(),
        FpsVerdict::Poor => verdict.red(),
        FpsVerdict::InsufficientData => verdict.dimmed(),
    };
    out.push_str(&format!("  Verdict:           {}\n\n", verdict));
    out
}

fn render_memory(result: &RunResult, analysis: &Analysis) -> String {
    let memory = match &result.memory {
        Some(memory) => memory,
        None => return String::new(),
    };

    let used_mb = (memory.used as f64 / BYTES_PER_MB).round();
    let total_mb = (memory.total as f64 / BYTES_PER_MB).round();

    let mut out = format!("💾 {}", section("MEMORY"));
    out.push_str(&format!("  Used:              {}MB / {}MB\n", used_mb, total_mb));
    if memory.total > 0 {
        out.push_str(&format!(
            "  Of allocated heap: {:.2}%\n",
            memory.used as f64 * 100.0 / memory.total as f64
        ));
    }
    // Heap usage is judged against the limit, not the allocated total
    if let Some(percent) = analysis.memory.as_ref().and_then(|m| m.usage_percent) {
        out.push_str(&format!("  Of heap limit:     {:.2}%\n", percent));
    }
    out.push('\n');
    out
}

fn render_violations(analysis: &Analysis) -> String {
    if analysis.violations.is_empty() {
        return String::new();
    }

    let mut out = format!("🚨 {}", section("THRESHOLD VIOLATIONS"));
    for violation in &analysis.violations {
        let line = format!(
            "  {}: {:.2} (threshold {:.2})",
            violation.metric, violation.actual, violation.threshold
        );
        let line = match violation.severity {
            Severity::Error => line.red(),
            Severity::Warning => line.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out.push('\n');
    out
}

fn render_status(analysis: &Analysis) -> String {
    let mut out = rule('═');
    let count = analysis.violations.len();
    let status_msg = match analysis.status {
        AnalysisStatus::Failed => format!("❌ STATUS: FAILED ({} violations)", count)
            .red()
            .bold(),
        AnalysisStatus::Warning => format!("⚠️  STATUS: WARNING ({} violations)", count)
            .yellow()
            .bold(),
        AnalysisStatus::Passed => "✅ STATUS: PASSED".green().bold(),
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Observation;
    use crate::analysis::{analyze_run, ThresholdConfig};
    use crate::run::{build_run_result, MemorySnapshot, RunCapture};

    fn report_for(capture: RunCapture) -> String {
        let result = build_run_result("interaction-performance", &capture);
        let analysis = analyze_run(&result, &ThresholdConfig::default());
        render_terminal_report(&result, &analysis)
    }

    #[test]
    fn test_report_sections() {
        let report = report_for(RunCapture {
            elapsed_ms: 12_340,
            observations: vec![
                Observation::new("hover-sequential", 400.0),
                Observation::new("activate-all", 2500.0),
            ],
            fps_samples: vec![60.0],
            memory: Some(MemorySnapshot::new(50 * 1024 * 1024, 100 * 1024 * 1024, 0)),
            ..Default::default()
        });

        assert!(report.contains("interaction-performance"));
        assert!(report.contains("Test time: 12.34s (12340ms)"));
        assert!(report.contains("hover-sequential"));
        assert!(report.contains("smooth"));
        assert!(report.contains("50MB / 100MB"));
        assert!(report.contains("50.00%"));
        assert!(report.contains("interactions.categories.activate-all"));
        assert!(report.contains("STATUS: WARNING (1 violations)"));
    }

    #[test]
    fn test_report_empty_run() {
        let report = report_for(RunCapture::default());

        assert!(report.contains("No timed interactions recorded"));
        assert!(report.contains("insufficient data"));
        assert!(!report.contains("MEMORY"));
        assert!(report.contains("STATUS: PASSED"));
    }

    #[test]
    fn test_memory_percent_omitted_without_total() {
        let report = report_for(RunCapture {
            memory: Some(MemorySnapshot::new(0, 0, 0)),
            ..Default::default()
        });

        assert!(report.contains("0MB / 0MB"));
        assert!(!report.contains("Of allocated heap:"));
        assert!(!report.contains("Of heap limit:"));
    }

    #[test]
    fn test_heap_limit_usage_shown_next_to_violation() {
        let mb = 1024 * 1024;
        let report = report_for(RunCapture {
            memory: Some(MemorySnapshot::new(90 * mb, 180 * mb, 100 * mb)),
            ..Default::default()
        });

        assert!(report.contains("Of allocated heap: 50.00%"));
        assert!(report.contains("Of heap limit:     90.00%"));
        assert!(report.contains("STATUS: WARNING (1 violations)"));
    }
}
