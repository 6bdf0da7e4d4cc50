//! Frame timeline probing via `ffprobe`.
//!
//! [`FrameTimeline`] holds the per-frame presentation timecodes of a video
//! stream, indexed sequentially in decode order. Sequential indexing is
//! deliberate: some encoders (notably iOS re-exports) strip per-frame
//! picture-number metadata, so the frame's position in the `ffprobe` listing
//! is the only identifier that works across files. Frames whose timing
//! fields are all absent keep their position in the timeline with no
//! timecode.

use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::error::TailframesError;
use crate::ffmpeg::{FFPROBE, ffprobe_command, run_tool};

/// One frame entry as listed by `ffprobe -show_entries frame=...`.
///
/// Older ffprobe versions report `pkt_pts_time`, newer ones only
/// `pts_time`; `pkt_dts_time` is the last resort for streams without
/// presentation timestamps. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct FfprobeFrame {
    pts_time: Option<String>,
    pkt_pts_time: Option<String>,
    pkt_dts_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFrameList {
    #[serde(default)]
    frames: Vec<FfprobeFrame>,
}

impl FfprobeFrame {
    /// Best available timecode, preferring presentation over decode time.
    fn timecode(&self) -> Option<Duration> {
        self.pkt_pts_time
            .as_deref()
            .or(self.pts_time.as_deref())
            .or(self.pkt_dts_time.as_deref())
            .and_then(|value| value.parse::<f64>().ok())
            .map(|seconds| Duration::from_secs_f64(seconds.max(0.0)))
    }
}

/// The per-frame presentation timeline of a video stream.
///
/// Produced by [`FrameTimeline::probe`]. The timeline length is the frame
/// count; each position holds that frame's timecode when `ffprobe` reported
/// one.
///
/// # Example
///
/// ```no_run
/// use tailframes::FrameTimeline;
///
/// let timeline = FrameTimeline::probe("input.mp4".as_ref())?;
/// println!("{} frames", timeline.frame_count());
/// # Ok::<(), tailframes::TailframesError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrameTimeline {
    timecodes: Vec<Option<Duration>>,
}

impl FrameTimeline {
    /// Build a timeline directly from per-frame timecodes.
    ///
    /// Position in the vector is the frame number.
    pub fn from_timecodes(timecodes: Vec<Option<Duration>>) -> Self {
        Self { timecodes }
    }

    /// Probe a video file's frame timeline.
    ///
    /// Runs `ffprobe` over the first video stream, listing every frame's
    /// timing fields as JSON, and indexes the frames sequentially. This
    /// decodes the stream's packet headers, so it is the slow part of a run
    /// on long inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TailframesError::ToolMissing`] when `ffprobe` is not
    /// installed, [`TailframesError::ToolFailure`] when it rejects the file,
    /// [`TailframesError::ProbeParse`] when its output is unparseable, and
    /// [`TailframesError::NoFramesDetected`] when the file has no decodable
    /// video frames.
    pub fn probe(path: &Path) -> Result<Self, TailframesError> {
        let mut command = ffprobe_command();
        command
            .args([
                "-select_streams",
                "v:0",
                "-show_entries",
                "frame=pts_time,pkt_pts_time,pkt_dts_time",
                "-of",
                "json",
            ])
            .arg(path);

        let output = run_tool(FFPROBE, &mut command)?;
        let timeline = Self::parse(&String::from_utf8_lossy(&output.stdout))?;

        if timeline.is_empty() {
            return Err(TailframesError::NoFramesDetected {
                path: path.to_path_buf(),
            });
        }

        log::debug!(
            "{} lists {} frame(s) for {}",
            FFPROBE,
            timeline.frame_count(),
            path.display()
        );

        Ok(timeline)
    }

    /// Parse the JSON frame listing produced by `ffprobe -of json`.
    ///
    /// # Errors
    ///
    /// Returns [`TailframesError::ProbeParse`] when the input is not the
    /// expected JSON shape.
    pub fn parse(json: &str) -> Result<Self, TailframesError> {
        let listing: FfprobeFrameList =
            serde_json::from_str(json).map_err(|error| TailframesError::ProbeParse {
                reason: error.to_string(),
            })?;

        Ok(Self::from_timecodes(
            listing.frames.iter().map(FfprobeFrame::timecode).collect(),
        ))
    }

    /// Total number of frames in the stream.
    pub fn frame_count(&self) -> u64 {
        self.timecodes.len() as u64
    }

    /// Returns `true` when the stream has no frames.
    pub fn is_empty(&self) -> bool {
        self.timecodes.is_empty()
    }

    /// Timecode of a frame, when `ffprobe` reported one.
    pub fn timecode(&self, frame_number: u64) -> Option<Duration> {
        self.timecodes
            .get(usize::try_from(frame_number).ok()?)
            .copied()
            .flatten()
    }
}
