//! # tailframes
//!
//! Pick a video file from a directory and extract its final frames as PNG
//! images.
//!
//! `tailframes` is a thin pipeline around the FFmpeg command-line tools: it
//! scans a directory for video files, asks the user to choose one, probes the
//! file's frame timeline with `ffprobe`, and shells out to `ffmpeg` to write
//! the last four frames as individual images into a folder named after the
//! source file. No decoding happens in-process — seeking, decoding, and
//! timestamping are all delegated to the external binaries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tailframes::{extract_final_frames, scan_directory, select_video};
//!
//! let files = scan_directory(&std::env::current_dir()?)?;
//! let stdin = std::io::stdin();
//! let selected = select_video(&files, stdin.lock(), std::io::stdout())?;
//! let report = extract_final_frames(&selected.path)?;
//! println!("Extracted frames saved in folder: {}", report.output_directory.display());
//! # Ok::<(), tailframes::TailframesError>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Scan** — [`scan_directory`] lists recognized video files in stable,
//!   case-insensitive alphabetical order.
//! - **Select** — [`select_video`] prompts for a numeric choice, re-prompting
//!   on invalid input.
//! - **Probe** — [`FrameTimeline::probe`] reads the per-frame presentation
//!   timeline via `ffprobe`.
//! - **Extract** — [`extract_final_frames`] invokes `ffmpeg` once per target
//!   frame, selecting the last four frames of the decoded sequence.
//! - **Name** — [`naming::frame_file_name`] builds deterministic output
//!   names: `{base}_frame{index}_{timecode}.png`.
//!
//! ## Requirements
//!
//! The `ffmpeg` and `ffprobe` binaries must be installed and on `PATH`.
//! A missing binary surfaces as [`TailframesError::ToolMissing`] with
//! installation guidance.

pub mod error;
pub mod extract;
pub mod ffmpeg;
pub mod naming;
pub mod probe;
pub mod prompt;
pub mod scan;

pub use error::TailframesError;
pub use extract::{
    ExtractionReport, FINAL_FRAME_COUNT, FramePlan, OutputFrame, extract_final_frames,
    plan_final_frames,
};
pub use probe::FrameTimeline;
pub use prompt::select_video;
pub use scan::{VIDEO_EXTENSIONS, VideoFile, scan_directory};
