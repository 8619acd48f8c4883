use perfscope::compress::*;
use perfscope::utils::error::CompressError;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Treats files whose contents start with "MARKED" as already processed
struct ContentMarker;

impl IdempotenceMarker for ContentMarker {
    fn is_marked(&self, path: &Path) -> bool {
        fs::read_to_string(path)
            .map(|s| s.starts_with("MARKED"))
            .unwrap_or(false)
    }

    fn marker_args(&self) -> Vec<String> {
        vec!["--mark".to_string()]
    }
}

/// Writes a marked file half the size of the input
#[derive(Default)]
struct HalvingTranscoder {
    calls: RefCell<Vec<(PathBuf, PathBuf, Vec<String>)>>,
}

impl Transcoder for HalvingTranscoder {
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        extra_args: &[String],
    ) -> Result<(), CompressError> {
        self.calls.borrow_mut().push((
            input.to_path_buf(),
            output.to_path_buf(),
            extra_args.to_vec(),
        ));

        let len = fs::metadata(input)?.len() as usize;
        let mut body = "MARKED".to_string();
        body.push_str(&"x".repeat((len / 2).saturating_sub(body.len())));
        fs::write(output, body)?;
        Ok(())
    }
}

/// Leaves a partial temp file behind and fails
struct FailingTranscoder;

impl Transcoder for FailingTranscoder {
    fn transcode(&self, input: &Path, output: &Path, _: &[String]) -> Result<(), CompressError> {
        fs::write(output, "partial")?;
        Err(CompressError::TranscodeFailed {
            file: input.to_path_buf(),
            status: "exit status: 1".to_string(),
            stderr: "invalid data".to_string(),
        })
    }
}

fn setup_videos() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("intro.mp4"), "y".repeat(1000)).unwrap();
    fs::write(dir.path().join("done.mp4"), "MARKED already").unwrap();
    fs::write(dir.path().join("intro_original.mp4"), "z".repeat(1000)).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a video").unwrap();
    dir
}

fn temp_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains("_temp"))
        .collect()
}

#[test]
fn test_collect_videos_filters() {
    let dir = setup_videos();

    let videos = collect_videos(dir.path()).unwrap();
    let names: Vec<String> = videos
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["done.mp4", "intro.mp4"]);
}

#[test]
fn test_collect_missing_dir() {
    let videos = collect_videos(Path::new("/nonexistent/videos")).unwrap();
    assert!(videos.is_empty());
}

#[test]
fn test_compress_directory() {
    let dir = setup_videos();
    let transcoder = HalvingTranscoder::default();

    let report = compress_directory(dir.path(), &ContentMarker, &transcoder, false).unwrap();

    assert_eq!(report.skipped, vec!["done.mp4"]);
    assert_eq!(report.compressed.len(), 1);
    assert_eq!(report.compressed[0].file, "intro.mp4");
    assert_eq!(report.compressed[0].original_bytes, 1000);
    assert_eq!(report.compressed[0].compressed_bytes, 500);
    assert_eq!(report.total_reduction_percent(), 50.0);
    assert_eq!(report.space_saved(), 500);
    assert!(report.failed.is_empty());

    let calls = transcoder.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, dir.path().join("intro_temp.mp4"));
    assert_eq!(calls[0].2, vec!["--mark"]);

    assert!(temp_files(dir.path()).is_empty());
    assert!(ContentMarker.is_marked(&dir.path().join("intro.mp4")));
}

#[test]
fn test_second_pass_is_noop() {
    let dir = setup_videos();
    let transcoder = HalvingTranscoder::default();

    compress_directory(dir.path(), &ContentMarker, &transcoder, false).unwrap();
    let second = compress_directory(dir.path(), &ContentMarker, &transcoder, false).unwrap();

    assert!(second.compressed.is_empty());
    assert_eq!(second.skipped, vec!["done.mp4", "intro.mp4"]);
    assert_eq!(transcoder.calls.borrow().len(), 1);
}

#[test]
fn test_dry_run_touches_nothing() {
    let dir = setup_videos();
    let transcoder = HalvingTranscoder::default();

    let report = compress_directory(dir.path(), &ContentMarker, &transcoder, true).unwrap();

    assert_eq!(report.pending, vec!["intro.mp4"]);
    assert!(report.compressed.is_empty());
    assert!(transcoder.calls.borrow().is_empty());
    assert_eq!(fs::metadata(dir.path().join("intro.mp4")).unwrap().len(), 1000);
}

#[test]
fn test_failure_is_recorded_and_cleaned_up() {
    let dir = setup_videos();

    let report = compress_directory(dir.path(), &ContentMarker, &FailingTranscoder, false).unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file, "intro.mp4");
    assert!(report.failed[0].error.contains("invalid data"));
    assert!(temp_files(dir.path()).is_empty());
    assert_eq!(fs::read_to_string(dir.path().join("intro.mp4")).unwrap(), "y".repeat(1000));
}
