//! Compress command implementation.

use super::models::CompressArgs;
use crate::compress::{
    compress_directory, find_tool, to_mb, CommentTagMarker, CompressionReport, FfmpegTranscoder,
    TranscodeSettings,
};
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Highest CRF libx264 accepts
const MAX_CRF: u8 = 51;

/// Execute the compress command
pub fn execute_compress(args: CompressArgs) -> Result<CompressionReport> {
    let ffmpeg = find_tool("ffmpeg").context("FFmpeg is required to compress videos")?;

    let ffprobe = find_tool("ffprobe").unwrap_or_else(|_| {
        warn!("ffprobe not found; every video will be treated as uncompressed");
        PathBuf::from("ffprobe")
    });

    let settings = TranscodeSettings {
        crf: args.crf,
        preset: args.preset.clone(),
        ..Default::default()
    };

    let marker = CommentTagMarker::new(ffprobe);
    let transcoder = FfmpegTranscoder::new(ffmpeg, settings);

    info!("Scanning {} for videos...", args.dir.display());
    let report = compress_directory(&args.dir, &marker, &transcoder, args.dry_run)
        .with_context(|| format!("Failed to scan {}", args.dir.display()))?;

    println!("{}", render_compression_summary(&report));

    if !report.failed.is_empty() {
        warn!("{} file(s) failed to compress", report.failed.len());
    }

    Ok(report)
}

/// Validate compress arguments
pub fn validate_compress_args(args: &CompressArgs) -> Result<()> {
    if args.crf > MAX_CRF {
        anyhow::bail!("crf must be between 0 and {}", MAX_CRF);
    }

    if args.preset.is_empty() {
        anyhow::bail!("preset cannot be empty");
    }

    Ok(())
}

/// Text summary of a compression pass
pub fn render_compression_summary(report: &CompressionReport) -> String {
    let mut out = String::new();

    if !report.skipped.is_empty() {
        out.push_str(&format!(
            "📋 Skipped {} already compressed file(s)\n",
            report.skipped.len()
        ));
    }

    if !report.pending.is_empty() {
        out.push_str(&format!("🔎 {} file(s) would be compressed:\n", report.pending.len()));
        for file in &report.pending {
            out.push_str(&format!("  {}\n", file));
        }
    }

    if report.compressed.is_empty() {
        if report.pending.is_empty() && report.failed.is_empty() {
            out.push_str("✅ All videos are already compressed!\n");
        }
    } else {
        out.push_str("\n📊 Compression Summary:\n");
        out.push_str(&"─".repeat(50));
        out.push('\n');

        for file in &report.compressed {
            out.push_str(&format!(
                "{}: {:.1}MB → {:.1}MB ({:.1}%)\n",
                file.file,
                to_mb(file.original_bytes),
                to_mb(file.compressed_bytes),
                file.reduction_percent()
            ));
        }

        out.push_str(&"─".repeat(50));
        out.push('\n');
        out.push_str(&format!(
            "Total: {:.1}MB → {:.1}MB ({:.1}% reduction)\n",
            to_mb(report.total_original_bytes()),
            to_mb(report.total_compressed_bytes()),
            report.total_reduction_percent()
        ));
        out.push_str(&format!(
            "💾 Space saved: {:.1}MB\n",
            report.space_saved() as f64 / crate::utils::config::BYTES_PER_MB
        ));
    }

    for failed in &report.failed {
        out.push_str(&format!("❌ Failed to compress {}: {}\n", failed.file, failed.error));
    }

    out
}
