use crate::output::read_run_result;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a run result JSON file
pub fn validate_result_file(file_path: PathBuf) -> Result<()> {
    println!("Validating result: {}", file_path.display());

    let result = read_run_result(&file_path)?;

    println!("✓ Valid result JSON");
    println!("  Version: {}", result.version);
    println!("  Scenario: {}", result.scenario);
    println!("  Total Time: {}ms", result.total_time.ms);
    println!("  Interactions: {}", result.interactions.total);
    println!("  Patterns: {}", result.interactions.patterns.len());
    println!("  FPS Samples: {}", result.fps.summary.count);

    if let Some(memory) = &result.memory {
        if !memory.is_consistent() {
            println!("  ⚠ Memory snapshot is not ordered used <= total <= limit");
        }
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Perfscope Result Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  scenario: string           - Scenario name");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  config: object             - Producer configuration echo");
        println!("  total_time: object         - ms and seconds");
        println!("  interactions: object       - Interaction statistics");
        println!("    total: number            - Individual UI actions");
        println!("    summary: object          - average/minimum/maximum/count");
        println!("    patterns: object         - Summary per category label");
        println!("    details: array           - Raw observations (label, value)");
        println!("  fps: object                - Frame-rate statistics");
        println!("    summary: object          - average/minimum/maximum/count");
        println!("    history: array           - Samples in recording order");
        println!("  memory: object?            - used/total/limit in bytes");
        println!();
        println!("Empty sample sets are reported as all-zero summaries with count 0.");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Perfscope v{}", env!("CARGO_PKG_VERSION"));
    println!("Result Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Statistics and threshold analysis for UI performance runs.");
}
