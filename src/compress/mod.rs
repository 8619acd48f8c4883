//! Idempotent video compression.
//!
//! Scans a directory for videos, skips files that already carry the
//! idempotence marker and re-encodes the rest in place:
//! 1. Collect `.mp4` files (ignoring `*_original*` backups)
//! 2. Skip files the marker recognizes
//! 3. Transcode to a sibling temp file with the marker embedded
//! 4. Replace the original with the temp file

pub mod marker;
pub mod transcoder;

pub use marker::{probe_output_is_marked, CommentTagMarker, IdempotenceMarker};
pub use transcoder::{ffmpeg_args, find_tool, FfmpegTranscoder, TranscodeSettings, Transcoder};

use crate::utils::config::{BYTES_PER_MB, ORIGINAL_SUFFIX, TEMP_SUFFIX, VIDEO_EXTENSION};
use crate::utils::error::CompressError;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Size change for one compressed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCompression {
    pub file: String,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl FileCompression {
    /// Size reduction in percent; 0 for an empty original
    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_bytes, self.compressed_bytes)
    }
}

/// A file whose compression failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub file: String,
    pub error: String,
}

/// Outcome of one directory pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompressionReport {
    pub compressed: Vec<FileCompression>,

    /// Already marked, left untouched
    pub skipped: Vec<String>,

    /// Would be compressed (dry run only)
    pub pending: Vec<String>,

    pub failed: Vec<FailedFile>,
}

impl CompressionReport {
    pub fn total_original_bytes(&self) -> u64 {
        self.compressed.iter().map(|f| f.original_bytes).sum()
    }

    pub fn total_compressed_bytes(&self) -> u64 {
        self.compressed.iter().map(|f| f.compressed_bytes).sum()
    }

    /// Overall reduction in percent; 0 when nothing was compressed
    pub fn total_reduction_percent(&self) -> f64 {
        reduction_percent(self.total_original_bytes(), self.total_compressed_bytes())
    }

    /// Bytes saved; negative when re-encoding grew the files
    pub fn space_saved(&self) -> i64 {
        self.total_original_bytes() as i64 - self.total_compressed_bytes() as i64
    }
}

fn reduction_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Bytes to megabytes, for display
pub fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// List candidate videos in `dir`, sorted by path
///
/// A missing directory yields an empty list.
pub fn collect_videos(dir: &Path) -> Result<Vec<PathBuf>, CompressError> {
    if !dir.exists() {
        info!("No videos directory at {}, nothing to do", dir.display());
        return Ok(Vec::new());
    }

    let mut videos = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_candidate(&path) {
            videos.push(path);
        }
    }
    videos.sort();

    debug!("Found {} candidate videos in {}", videos.len(), dir.display());
    Ok(videos)
}

fn is_candidate(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .map(|ext| ext == VIDEO_EXTENSION)
        .unwrap_or(false);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    path.is_file()
        && has_extension
        && !name.contains(ORIGINAL_SUFFIX)
        && !name.contains(&format!("{}.", TEMP_SUFFIX))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Compress every unmarked video in `dir`
///
/// **Public** - main entry point for the compress command
///
/// Per-file failures are recorded in the report and don't stop the pass;
/// only an unreadable directory is an error.
pub fn compress_directory(
    dir: &Path,
    marker: &dyn IdempotenceMarker,
    transcoder: &dyn Transcoder,
    dry_run: bool,
) -> Result<CompressionReport, CompressError> {
    let mut report = CompressionReport::default();

    for video in collect_videos(dir)? {
        let name = file_name(&video);

        if marker.is_marked(&video) {
            info!("Skipping {} (already compressed)", name);
            report.skipped.push(name);
            continue;
        }

        if dry_run {
            info!("Would compress {}", name);
            report.pending.push(name);
            continue;
        }

        info!("Compressing {}", name);
        match compress_file(&video, marker, transcoder) {
            Ok(result) => {
                info!(
                    "Compressed {}: {:.1}MB -> {:.1}MB ({:.1}% reduction)",
                    name,
                    to_mb(result.original_bytes),
                    to_mb(result.compressed_bytes),
                    result.reduction_percent()
                );
                report.compressed.push(result);
            }
            Err(e) => {
                warn!("Failed to compress {}: {}", name, e);
                report.failed.push(FailedFile {
                    file: name,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Compress one file in place via a sibling temp file
pub fn compress_file(
    path: &Path,
    marker: &dyn IdempotenceMarker,
    transcoder: &dyn Transcoder,
) -> Result<FileCompression, CompressError> {
    let temp = temp_path(path);

    let result = transcode_and_replace(path, &temp, marker, transcoder);

    if temp.exists() {
        if let Err(e) = fs::remove_file(&temp) {
            warn!("Could not remove {}: {}", temp.display(), e);
        }
    }

    result
}

fn transcode_and_replace(
    path: &Path,
    temp: &Path,
    marker: &dyn IdempotenceMarker,
    transcoder: &dyn Transcoder,
) -> Result<FileCompression, CompressError> {
    let original_bytes = fs::metadata(path)?.len();

    transcoder.transcode(path, temp, &marker.marker_args())?;

    let compressed_bytes = fs::metadata(temp)?.len();
    fs::rename(temp, path)?;

    Ok(FileCompression {
        file: file_name(path),
        original_bytes,
        compressed_bytes,
    })
}

/// `clip.mp4` -> `clip_temp.mp4`
fn temp_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}.{}", stem, TEMP_SUFFIX, VIDEO_EXTENSION))
}
