use crate::utils::config::{DEFAULT_CRF, DEFAULT_PRESET, DEFAULT_RESULTS_DIR};
use std::path::PathBuf;

/// Arguments for the ingest command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct IngestArgs {
    /// Raw capture JSON written by a scenario driver
    pub input: PathBuf,

    /// Scenario name, used in artifact file names
    pub scenario: String,

    /// Threshold TOML (defaults when absent)
    pub thresholds: Option<PathBuf>,

    /// Directory for results, analysis and log
    pub results_dir: PathBuf,

    /// Persist artifacts
    pub save: bool,

    /// Print the full report to stdout
    pub print_summary: bool,

    /// Fail when the analysis status is FAILED
    pub strict: bool,
}

impl Default for IngestArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("capture.json"),
            scenario: String::new(),
            thresholds: None,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            save: true,
            print_summary: false,
            strict: false,
        }
    }
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Persisted run result
    pub file: PathBuf,

    pub thresholds: Option<PathBuf>,

    /// Where to write the analysis record (optional)
    pub output: Option<PathBuf>,

    pub strict: bool,
}

/// Arguments for the compress command
#[derive(Debug, Clone)]
pub struct CompressArgs {
    /// Directory holding the videos
    pub dir: PathBuf,

    /// x264 constant rate factor
    pub crf: u8,

    /// x264 preset
    pub preset: String,

    /// Report what would be compressed without touching files
    pub dry_run: bool,
}

impl Default for CompressArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets/videos"),
            crf: DEFAULT_CRF,
            preset: DEFAULT_PRESET.to_string(),
            dry_run: false,
        }
    }
}
