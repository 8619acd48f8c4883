//! External transcoder invocation.

use crate::utils::config::{DEFAULT_CRF, DEFAULT_PRESET};
use crate::utils::error::CompressError;
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-encode one file
pub trait Transcoder {
    /// Encode `input` into `output`, appending `extra_args` before the
    /// output path
    fn transcode(&self, input: &Path, output: &Path, extra_args: &[String])
        -> Result<(), CompressError>;
}

/// Encoder settings passed to ffmpeg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeSettings {
    pub video_codec: String,
    pub preset: String,
    pub crf: u8,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for TranscodeSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            preset: DEFAULT_PRESET.to_string(),
            crf: DEFAULT_CRF,
            audio_codec: "aac".to_string(),
            audio_bitrate: "128k".to_string(),
        }
    }
}

/// Transcoder backed by the `ffmpeg` binary
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    ffmpeg: PathBuf,
    settings: TranscodeSettings,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg: impl Into<PathBuf>, settings: TranscodeSettings) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            settings,
        }
    }

    pub fn settings(&self) -> &TranscodeSettings {
        &self.settings
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        extra_args: &[String],
    ) -> Result<(), CompressError> {
        let args = ffmpeg_args(&self.settings, input, output, extra_args);
        debug!("Running {} {:?}", self.ffmpeg.display(), args);

        let result = Command::new(&self.ffmpeg).args(&args).output()?;

        if !result.status.success() {
            return Err(CompressError::TranscodeFailed {
                file: input.to_path_buf(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Full ffmpeg argument list for one file
pub fn ffmpeg_args(
    settings: &TranscodeSettings,
    input: &Path,
    output: &Path,
    extra_args: &[String],
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-i".into(), input.into()];

    let options = [
        ("-c:v", settings.video_codec.clone()),
        ("-preset", settings.preset.clone()),
        ("-crf", settings.crf.to_string()),
        ("-c:a", settings.audio_codec.clone()),
        ("-b:a", settings.audio_bitrate.clone()),
        ("-movflags", "+faststart".to_string()),
    ];
    for (flag, value) in options {
        args.push(flag.into());
        args.push(value.into());
    }

    args.extend(extra_args.iter().map(OsString::from));
    args.push("-y".into());
    args.push(output.into());
    args
}

/// Locate a tool on PATH
pub fn find_tool(name: &str) -> Result<PathBuf, CompressError> {
    which::which(name).map_err(|_| CompressError::ToolNotFound(name.to_string()))
}
