//! Duration probe seam.
//!
//! The duration check is the one suspend-capable step of validation. It is
//! behind a trait so pipeline tests run without an ffprobe binary.

use async_trait::async_trait;
use std::path::Path;

use reelup_media::MediaError;

use crate::error::{IntakeError, IntakeResult};

/// Decodes media metadata to obtain playback duration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DurationProbe: Send + Sync {
    /// Resolve the playback duration of the file in seconds, or fail with
    /// a decode error if the file is not a readable video.
    async fn probe_duration(&self, path: &Path) -> IntakeResult<f64>;
}

/// Production probe backed by ffprobe.
#[derive(Debug, Default)]
pub struct FfprobeDurationProbe;

#[async_trait]
impl DurationProbe for FfprobeDurationProbe {
    async fn probe_duration(&self, path: &Path) -> IntakeResult<f64> {
        reelup_media::probe_duration(path).await.map_err(|e| match e {
            MediaError::Io(io) => IntakeError::Io(io),
            other => IntakeError::decode_failed(other.to_string()),
        })
    }
}
