//! Error types for the intake pipeline.

use reelup_models::{format_bytes, MAX_UPLOAD_BYTES};
use thiserror::Error;

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Errors that can occur between file selection and server persistence.
///
/// Validation errors are terminal for the current candidate: it is
/// discarded and the user must reselect. Transfer errors leave the
/// accepted file in place.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("File size exceeds {} limit ({size_bytes} bytes)", format_bytes(MAX_UPLOAD_BYTES))]
    FileTooLarge { size_bytes: u64 },

    #[error("Video duration exceeds 5 minutes limit ({duration_secs:.1}s)")]
    DurationExceeded { duration_secs: f64 },

    #[error("Invalid video file: {0}")]
    DecodeFailed(String),

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Server rejected upload ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    #[error("No accepted file to submit")]
    NoSelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntakeError {
    /// Create a decode failure error.
    pub fn decode_failed(message: impl Into<String>) -> Self {
        Self::DecodeFailed(message.into())
    }

    /// Create a network failure error.
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::NetworkFailure(message.into())
    }

    /// Whether this error belongs to the validation stage (as opposed to
    /// the transfer stage).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IntakeError::FileTooLarge { .. }
                | IntakeError::DurationExceeded { .. }
                | IntakeError::DecodeFailed(_)
        )
    }
}

impl From<reqwest::Error> for IntakeError {
    fn from(e: reqwest::Error) -> Self {
        Self::NetworkFailure(e.to_string())
    }
}
