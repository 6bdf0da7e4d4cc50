//! Construction and execution of FFmpeg tool invocations.
//!
//! All external work goes through [`run_tool`], which maps the two failure
//! modes — binary not installed, binary ran but exited unsuccessfully — to
//! their dedicated error variants. Commands are built as argument vectors;
//! nothing is passed through a shell.

use std::process::{Command, Output, Stdio};

use crate::error::TailframesError;

/// Logical name of the frame-extraction binary.
pub const FFMPEG: &str = "ffmpeg";

/// Logical name of the probing binary.
pub const FFPROBE: &str = "ffprobe";

/// Base `ffmpeg` command with banner and log noise suppressed.
pub fn ffmpeg_command() -> Command {
    let mut command = Command::new(FFMPEG);
    command.args(["-hide_banner", "-loglevel", "error"]);
    command.stdin(Stdio::null());
    command
}

/// Base `ffprobe` command with banner and log noise suppressed.
pub fn ffprobe_command() -> Command {
    let mut command = Command::new(FFPROBE);
    command.args(["-hide_banner", "-v", "error"]);
    command.stdin(Stdio::null());
    command
}

/// Run an external tool to completion, capturing its output.
///
/// Blocks until the process exits. `tool` is the logical binary name used
/// for error attribution.
///
/// # Errors
///
/// Returns [`TailframesError::ToolMissing`] when the binary cannot be found
/// on `PATH`, [`TailframesError::ToolFailure`] carrying the tool's stderr
/// (or exit status when stderr is empty) on a non-zero exit, and
/// [`TailframesError::Io`] for other spawn failures.
pub fn run_tool(tool: &'static str, command: &mut Command) -> Result<Output, TailframesError> {
    log::debug!("running {command:?}");

    let output = command.output().map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            TailframesError::ToolMissing { tool }
        } else {
            TailframesError::Io(error)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stderr = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        return Err(TailframesError::ToolFailure { tool, stderr });
    }

    Ok(output)
}
