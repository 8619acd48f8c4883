//! Perfscope CLI
//!
//! Aggregates UI performance captures into results, analyzes them against
//! thresholds and keeps a run log. Also compresses demo videos in place.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use perfscope::commands::{
    display_schema, display_version, execute_analyze, execute_compress, execute_ingest,
    validate_compress_args, validate_ingest_args, validate_result_file, AnalyzeArgs,
    CompressArgs, IngestArgs,
};
use perfscope::utils::config::{DEFAULT_CRF, DEFAULT_PRESET, DEFAULT_RESULTS_DIR};

/// Perfscope - statistics and analysis for UI performance runs
#[derive(Parser, Debug)]
#[command(name = "perfscope")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate, analyze and persist a raw capture
    Ingest {
        /// Capture JSON written by a scenario driver
        #[arg(short, long)]
        input: PathBuf,

        /// Scenario name (e.g. interaction-performance)
        #[arg(short, long)]
        scenario: String,

        /// Threshold TOML file
        #[arg(short, long, env = "PERFSCOPE_THRESHOLDS")]
        thresholds: Option<PathBuf>,

        /// Directory for results, analysis and log
        #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
        results_dir: PathBuf,

        /// Don't write any artifacts
        #[arg(long)]
        no_save: bool,

        /// Print the full report to stdout
        #[arg(long)]
        summary: bool,

        /// Exit with an error when the run fails its thresholds
        #[arg(long)]
        strict: bool,
    },

    /// Re-analyze a persisted run result
    Analyze {
        /// Path to result JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Threshold TOML file
        #[arg(short, long, env = "PERFSCOPE_THRESHOLDS")]
        thresholds: Option<PathBuf>,

        /// Output path for the analysis JSON (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error when the run fails its thresholds
        #[arg(long)]
        strict: bool,
    },

    /// Compress videos that don't carry the compression marker yet
    Compress {
        /// Directory holding the .mp4 files
        #[arg(short, long)]
        dir: PathBuf,

        /// x264 constant rate factor (0-51, lower is better quality)
        #[arg(long, default_value_t = DEFAULT_CRF)]
        crf: u8,

        /// x264 preset
        #[arg(long, default_value = DEFAULT_PRESET)]
        preset: String,

        /// Only report which files would be compressed
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a result JSON file
    Validate {
        /// Path to result JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Ingest {
            input,
            scenario,
            thresholds,
            results_dir,
            no_save,
            summary,
            strict,
        } => {
            let args = IngestArgs {
                input,
                scenario,
                thresholds,
                results_dir,
                save: !no_save,
                print_summary: summary,
                strict,
            };

            // Validate args first
            validate_ingest_args(&args)?;

            execute_ingest(args)?;
        }

        Commands::Analyze {
            file,
            thresholds,
            output,
            strict,
        } => {
            execute_analyze(AnalyzeArgs {
                file,
                thresholds,
                output,
                strict,
            })?;
        }

        Commands::Compress {
            dir,
            crf,
            preset,
            dry_run,
        } => {
            let args = CompressArgs {
                dir,
                crf,
                preset,
                dry_run,
            };

            validate_compress_args(&args)?;

            execute_compress(args)?;
        }

        Commands::Validate { file } => {
            validate_result_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ingest() {
        let cli = Cli::parse_from([
            "perfscope",
            "ingest",
            "--input",
            "capture.json",
            "--scenario",
            "resize-performance",
            "--no-save",
        ]);

        match cli.command {
            Commands::Ingest {
                scenario,
                no_save,
                results_dir,
                ..
            } => {
                assert_eq!(scenario, "resize-performance");
                assert!(no_save);
                assert_eq!(results_dir, PathBuf::from(DEFAULT_RESULTS_DIR));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_compress_defaults() {
        let cli = Cli::parse_from(["perfscope", "compress", "--dir", "videos"]);

        match cli.command {
            Commands::Compress {
                crf,
                preset,
                dry_run,
                ..
            } => {
                assert_eq!(crf, DEFAULT_CRF);
                assert_eq!(preset, DEFAULT_PRESET);
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
