//! Error types for the `tailframes` crate.
//!
//! This module defines [`TailframesError`], the unified error type returned
//! by all fallible operations in the crate. Variants carry enough context to
//! produce a clear user-facing message without additional logging at the
//! call site — notably the stderr of a failed external tool invocation.

use std::{io::Error as IoError, path::PathBuf};

use thiserror::Error;

/// The unified error type for all `tailframes` operations.
///
/// Every public function that can fail returns `Result<T, TailframesError>`.
/// All variants are fatal from the pipeline's point of view; the one
/// recoverable condition (an invalid selection at the prompt) is handled by
/// re-prompting inside [`select_video`](crate::select_video) and never
/// becomes an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TailframesError {
    /// The scanned directory contains no recognized video files.
    #[error("No video files found in {directory}")]
    NoVideosFound {
        /// Directory that was scanned.
        directory: PathBuf,
    },

    /// A required external binary is not installed or not on `PATH`.
    #[error(
        "`{tool}` was not found on PATH. Install FFmpeg and try again \
         (macOS: `brew install ffmpeg`; Debian/Ubuntu: `apt-get install ffmpeg`; \
         Windows: download from https://ffmpeg.org/download.html and add it to PATH)"
    )]
    ToolMissing {
        /// Name of the missing binary (`ffmpeg` or `ffprobe`).
        tool: &'static str,
    },

    /// An external tool ran but exited unsuccessfully.
    ///
    /// Carries the tool's own error output so the user sees what FFmpeg
    /// reported (corrupt input, unsupported codec, unwritable output).
    #[error("{tool} failed: {stderr}")]
    ToolFailure {
        /// Name of the binary that failed.
        tool: &'static str,
        /// The tool's stderr, or its exit status when stderr was empty.
        stderr: String,
    },

    /// `ffprobe` produced output the frame-timeline parser cannot understand.
    #[error("Failed to parse ffprobe output: {reason}")]
    ProbeParse {
        /// Underlying reason the parse failed.
        reason: String,
    },

    /// `ffprobe` listed zero decodable frames for the video stream.
    #[error("No frames detected in {path}")]
    NoFramesDetected {
        /// Path of the probed video file.
        path: PathBuf,
    },

    /// An I/O error occurred while reading the directory, creating the
    /// output folder, or talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}
