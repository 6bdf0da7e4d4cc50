//! Output file naming.
//!
//! Names are deterministic: `{base}_frame{index}_{timecode}.png`, where the
//! timecode is rendered `HH-MM-SS.mmm`. Dashes rather than colons keep the
//! names valid on every filesystem. Reruns produce the same names and
//! overwrite prior output.

use std::time::Duration;

/// Image format written by the extractor.
pub const OUTPUT_EXTENSION: &str = "png";

/// Render a timecode as `HH-MM-SS.mmm`.
pub fn format_timecode(timecode: Duration) -> String {
    let total_seconds = timecode.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = timecode.subsec_millis();
    format!("{hours:02}-{minutes:02}-{seconds:02}.{millis:03}")
}

/// Build the output file name for one extracted frame.
///
/// `index` is the 1-based output index. A frame without a timecode renders
/// as `00-00-00.000`, matching a frame at the start of the stream.
pub fn frame_file_name(base_name: &str, index: usize, timecode: Option<Duration>) -> String {
    format!(
        "{base_name}_frame{index}_{}.{OUTPUT_EXTENSION}",
        format_timecode(timecode.unwrap_or_default())
    )
}
