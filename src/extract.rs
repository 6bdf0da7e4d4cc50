//! Final-frame extraction via `ffmpeg`.
//!
//! Extraction is planned by frame count, not by time offset: the targets are
//! the last frames of the decoded sequence, each selected with FFmpeg's
//! `select=eq(n,FRAME)` filter and written as a single PNG. One `ffmpeg`
//! invocation per frame, run synchronously in order.

use std::{
    fs,
    io::{Error as IoError, ErrorKind},
    path::{Path, PathBuf},
    time::Duration,
};

use crate::error::TailframesError;
use crate::ffmpeg::{FFMPEG, ffmpeg_command, run_tool};
use crate::naming::frame_file_name;
use crate::probe::FrameTimeline;

/// How many frames a run extracts from the end of the video.
pub const FINAL_FRAME_COUNT: u64 = 4;

/// One target frame of an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    /// 1-based output index, used in the file name.
    pub output_index: usize,
    /// Frame number in the source stream, 0-based decode order.
    pub frame_number: u64,
    /// The frame's timecode, when the probe reported one.
    pub timecode: Option<Duration>,
}

/// A single extracted still image.
///
/// Created on disk by `ffmpeg`; persists after the program exits.
#[derive(Debug, Clone)]
pub struct OutputFrame {
    /// 1-based output index.
    pub output_index: usize,
    /// Source frame number.
    pub frame_number: u64,
    /// The frame's timecode, when known.
    pub timecode: Option<Duration>,
    /// Where the image was written.
    pub path: PathBuf,
}

/// Result of a successful extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Folder that owns the extracted images.
    pub output_directory: PathBuf,
    /// The extracted frames, in output order.
    pub frames: Vec<OutputFrame>,
}

/// Plan the final frames of a timeline.
///
/// Targets the last [`FINAL_FRAME_COUNT`] frames of the stream. Shorter
/// videos are clamped to the available range, so a 2-frame video plans
/// frames 0 and 1; an empty timeline plans nothing.
pub fn plan_final_frames(timeline: &FrameTimeline) -> Vec<FramePlan> {
    let frame_count = timeline.frame_count();
    let start = frame_count.saturating_sub(FINAL_FRAME_COUNT);

    (start..frame_count)
        .enumerate()
        .map(|(offset, frame_number)| FramePlan {
            output_index: offset + 1,
            frame_number,
            timecode: timeline.timecode(frame_number),
        })
        .collect()
}

/// FFmpeg filter expression selecting exactly one frame by number.
///
/// The comma is escaped because `,` separates filters in a filter graph.
pub fn selection_filter(frame_number: u64) -> String {
    format!("select=eq(n\\,{frame_number})")
}

/// Extract the final frames of a video into a folder named after it.
///
/// Probes the frame timeline, creates the output folder next to the source
/// file (if absent), and invokes `ffmpeg` once per target frame. Existing
/// output files with the same names are overwritten silently.
///
/// # Errors
///
/// Returns [`TailframesError::ToolMissing`] or
/// [`TailframesError::ToolFailure`] when the external tools are absent or
/// reject the file, [`TailframesError::NoFramesDetected`] for a video with
/// no decodable frames, and [`TailframesError::Io`] when the output folder
/// cannot be created.
///
/// # Example
///
/// ```no_run
/// use tailframes::extract_final_frames;
///
/// let report = extract_final_frames("clip.mp4".as_ref())?;
/// for frame in &report.frames {
///     println!("{}", frame.path.display());
/// }
/// # Ok::<(), tailframes::TailframesError>(())
/// ```
pub fn extract_final_frames(video: &Path) -> Result<ExtractionReport, TailframesError> {
    let base_name = video
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            IoError::new(
                ErrorKind::InvalidInput,
                format!("{} has no file name", video.display()),
            )
        })?;

    let timeline = FrameTimeline::probe(video)?;
    let plans = plan_final_frames(&timeline);

    let parent = video.parent().unwrap_or_else(|| Path::new("."));
    let output_directory = parent.join(&base_name);
    fs::create_dir_all(&output_directory)?;

    let mut frames = Vec::with_capacity(plans.len());
    for plan in plans {
        let file_name = frame_file_name(&base_name, plan.output_index, plan.timecode);
        let output_path = output_directory.join(file_name);

        let mut command = ffmpeg_command();
        command
            .arg("-y")
            .arg("-i")
            .arg(video)
            .arg("-vf")
            .arg(selection_filter(plan.frame_number))
            .args(["-vsync", "vfr"])
            .arg(&output_path);
        run_tool(FFMPEG, &mut command)?;

        log::debug!("wrote frame {} to {}", plan.frame_number, output_path.display());

        frames.push(OutputFrame {
            output_index: plan.output_index,
            frame_number: plan.frame_number,
            timecode: plan.timecode,
            path: output_path,
        });
    }

    Ok(ExtractionReport {
        output_directory,
        frames,
    })
}
