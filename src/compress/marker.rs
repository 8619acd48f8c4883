//! Idempotence markers for processed artifacts.
//!
//! A marker answers "was this file already processed?" and supplies the
//! transcoder arguments that stamp the answer into the output.

use crate::utils::config::COMPRESSED_MARKER;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Check and embed an "already processed" token
pub trait IdempotenceMarker {
    /// Whether `path` carries the token
    fn is_marked(&self, path: &Path) -> bool;

    /// Extra transcoder arguments that embed the token in the output
    fn marker_args(&self) -> Vec<String>;
}

/// Marker stored in the container's `comment` metadata tag
///
/// Read back with `ffprobe`; any probe failure means "not marked", so an
/// unreadable file gets processed again rather than skipped.
#[derive(Debug, Clone)]
pub struct CommentTagMarker {
    ffprobe: PathBuf,
    token: String,
}

impl CommentTagMarker {
    pub fn new(ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe: ffprobe.into(),
            token: COMPRESSED_MARKER.to_string(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl IdempotenceMarker for CommentTagMarker {
    fn is_marked(&self, path: &Path) -> bool {
        let output = Command::new(&self.ffprobe)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output();

        match output {
            Ok(output) if output.status.success() => {
                probe_output_is_marked(&String::from_utf8_lossy(&output.stdout), &self.token)
            }
            Ok(output) => {
                debug!("ffprobe exited with {} for {}", output.status, path.display());
                false
            }
            Err(e) => {
                debug!("ffprobe failed for {}: {}", path.display(), e);
                false
            }
        }
    }

    fn marker_args(&self) -> Vec<String> {
        vec!["-metadata".to_string(), format!("comment={}", self.token)]
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    format: Option<ProbeSection>,

    #[serde(default)]
    streams: Vec<ProbeSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeSection {
    #[serde(default)]
    tags: HashMap<String, serde_json::Value>,
}

impl ProbeSection {
    fn has_comment(&self, token: &str) -> bool {
        self.tags
            .get("comment")
            .and_then(|value| value.as_str())
            .map(|comment| comment == token)
            .unwrap_or(false)
    }
}

/// Look for `comment=<token>` in ffprobe JSON (format or any stream)
///
/// **Public** - pure half of [`CommentTagMarker::is_marked`]
pub fn probe_output_is_marked(probe_json: &str, token: &str) -> bool {
    let probe: ProbeOutput = match serde_json::from_str(probe_json) {
        Ok(probe) => probe,
        Err(e) => {
            debug!("Unreadable ffprobe output: {}", e);
            return false;
        }
    };

    probe
        .format
        .iter()
        .chain(probe.streams.iter())
        .any(|section| section.has_comment(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_in_format_tags() {
        let json = r#"{ "format": { "tags": { "comment": "compressed", "encoder": "Lavf" } } }"#;
        assert!(probe_output_is_marked(json, "compressed"));
    }

    #[test]
    fn test_marked_in_stream_tags() {
        let json = r#"{
            "streams": [ { "tags": { "language": "und" } }, { "tags": { "comment": "compressed" } } ],
            "format": { "tags": {} }
        }"#;
        assert!(probe_output_is_marked(json, "compressed"));
    }

    #[test]
    fn test_not_marked() {
        let json = r#"{ "streams": [ {} ], "format": { "tags": { "comment": "raw footage" } } }"#;
        assert!(!probe_output_is_marked(json, "compressed"));
    }

    #[test]
    fn test_garbage_is_not_marked() {
        assert!(!probe_output_is_marked("", "compressed"));
        assert!(!probe_output_is_marked("not json", "compressed"));
    }

    #[test]
    fn test_marker_args() {
        let marker = CommentTagMarker::new("ffprobe").with_token("squeezed");
        assert_eq!(marker.marker_args(), vec!["-metadata", "comment=squeezed"]);
    }

    #[test]
    fn test_missing_ffprobe_is_not_marked() {
        let marker = CommentTagMarker::new("/nonexistent/ffprobe");
        assert!(!marker.is_marked(Path::new("video.mp4")));
    }
}
