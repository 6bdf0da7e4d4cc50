//! Error handling integration tests.
//!
//! These tests verify that meaningful errors are returned for the failure
//! conditions a user can actually hit: missing binaries, failing tools,
//! unreadable inputs.

use std::process::Command;

use tailframes::TailframesError;
use tailframes::ffmpeg::{FFMPEG, run_tool};

fn ffprobe_available() -> bool {
    Command::new("ffprobe")
        .arg("-version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[test]
fn missing_binary_produces_instructive_guidance() {
    let mut command = Command::new("tailframes-no-such-binary");
    let result = run_tool(FFMPEG, &mut command);
    assert!(matches!(result, Err(TailframesError::ToolMissing { .. })));

    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("not found on PATH"),
        "Error message should say the tool is missing: {message}",
    );
    assert!(
        message.contains("brew install ffmpeg"),
        "Error message should include installation guidance: {message}",
    );
}

#[cfg(unix)]
#[test]
fn failing_tool_surfaces_its_stderr() {
    let mut command = Command::new("sh");
    command.args(["-c", "echo decode blew up >&2; exit 3"]);

    let result = run_tool(FFMPEG, &mut command);
    assert!(matches!(result, Err(TailframesError::ToolFailure { .. })));

    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("decode blew up"),
        "Error message should carry the tool's stderr: {message}",
    );
}

#[cfg(unix)]
#[test]
fn silent_failure_reports_the_exit_status() {
    let mut command = Command::new("sh");
    command.args(["-c", "exit 7"]);

    let result = run_tool(FFMPEG, &mut command);
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("exited with"),
        "Empty stderr should fall back to the exit status: {message}",
    );
}

#[test]
fn probing_a_nonexistent_file_fails_with_the_tool_error() {
    if !ffprobe_available() {
        return;
    }

    let result = tailframes::FrameTimeline::probe("this_file_does_not_exist.mp4".as_ref());
    assert!(result.is_err());

    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("ffprobe failed"),
        "Error message should attribute the failure to ffprobe: {message}",
    );
}

#[test]
fn probing_a_non_media_file_is_an_error() {
    if !ffprobe_available() {
        return;
    }

    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid = directory.path().join("invalid.mp4");
    std::fs::write(&invalid, b"this is not a media file").expect("Failed to write file");

    let result = tailframes::FrameTimeline::probe(&invalid);
    assert!(result.is_err(), "Expected error for invalid media file");
}
