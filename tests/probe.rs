//! Frame timeline parsing tests.
//!
//! [`FrameTimeline::parse`] consumes the JSON frame listing produced by
//! `ffprobe -of json`, so these tests feed it captured shapes directly and
//! never need the binary installed.

use std::time::Duration;

use tailframes::{FrameTimeline, TailframesError};

#[test]
fn parses_a_plain_frame_listing() {
    let json = r#"{
        "frames": [
            { "pts_time": "0.000000" },
            { "pts_time": "0.040000" },
            { "pts_time": "0.080000" }
        ]
    }"#;

    let timeline = FrameTimeline::parse(json).expect("Listing should parse");
    assert_eq!(timeline.frame_count(), 3);
    assert_eq!(timeline.timecode(1), Some(Duration::from_millis(40)));
}

#[test]
fn prefers_pkt_pts_time_over_the_other_fields() {
    let json = r#"{
        "frames": [
            { "pkt_pts_time": "1.500000", "pts_time": "9.000000", "pkt_dts_time": "8.000000" }
        ]
    }"#;

    let timeline = FrameTimeline::parse(json).expect("Listing should parse");
    assert_eq!(timeline.timecode(0), Some(Duration::from_millis(1500)));
}

#[test]
fn falls_back_to_dts_when_pts_is_absent() {
    let json = r#"{ "frames": [ { "pkt_dts_time": "2.250000" } ] }"#;

    let timeline = FrameTimeline::parse(json).expect("Listing should parse");
    assert_eq!(timeline.timecode(0), Some(Duration::from_millis(2250)));
}

#[test]
fn frames_without_timing_fields_keep_their_position() {
    // iOS re-exports strip some per-frame metadata; the frame still counts.
    let json = r#"{
        "frames": [
            { "pts_time": "0.000000" },
            { },
            { "pts_time": "0.080000" }
        ]
    }"#;

    let timeline = FrameTimeline::parse(json).expect("Listing should parse");
    assert_eq!(timeline.frame_count(), 3);
    assert_eq!(timeline.timecode(1), None);
    assert_eq!(timeline.timecode(2), Some(Duration::from_millis(80)));
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{
        "frames": [
            { "pts_time": "0.000000", "key_frame": 1, "width": 1920, "pict_type": "I" }
        ],
        "program_version": { "version": "n7.0" }
    }"#;

    let timeline = FrameTimeline::parse(json).expect("Listing should parse");
    assert_eq!(timeline.frame_count(), 1);
}

#[test]
fn empty_listing_parses_to_an_empty_timeline() {
    let timeline = FrameTimeline::parse(r#"{ "frames": [] }"#).expect("Listing should parse");
    assert!(timeline.is_empty());
    assert_eq!(timeline.frame_count(), 0);
}

#[test]
fn missing_frames_key_parses_to_an_empty_timeline() {
    let timeline = FrameTimeline::parse("{}").expect("Listing should parse");
    assert!(timeline.is_empty());
}

#[test]
fn garbage_output_is_a_parse_error() {
    let result = FrameTimeline::parse("this is not json");
    assert!(matches!(result, Err(TailframesError::ProbeParse { .. })));

    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("Failed to parse ffprobe output"),
        "Error message should mention ffprobe parsing: {message}",
    );
}

#[test]
fn negative_timecodes_are_clamped_to_zero() {
    let json = r#"{ "frames": [ { "pts_time": "-0.023220" } ] }"#;

    let timeline = FrameTimeline::parse(json).expect("Listing should parse");
    assert_eq!(timeline.timecode(0), Some(Duration::ZERO));
}

#[test]
fn out_of_range_frame_numbers_have_no_timecode() {
    let timeline = FrameTimeline::from_timecodes(vec![Some(Duration::ZERO)]);
    assert_eq!(timeline.timecode(5), None);
}
