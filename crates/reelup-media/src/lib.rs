//! FFprobe wrapper for video metadata probing.
//!
//! The intake pipeline needs exactly one thing from a video file before
//! accepting it: the decoded playback duration. This crate shells out to
//! ffprobe and parses its JSON output.

pub mod error;
pub mod probe;

pub use error::{MediaError, MediaResult};
pub use probe::{probe_duration, probe_video, VideoInfo};
