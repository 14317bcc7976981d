//! API error types.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use reelup_models::{format_bytes, ErrorResponse, MAX_UPLOAD_BYTES};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Malformed upload request: {0}")]
    Multipart(String),

    #[error("Payload of {size_bytes} bytes exceeds upload limit")]
    PayloadTooLarge { size_bytes: u64 },

    #[error("Upload failed: {0}")]
    Upload(#[from] std::io::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoFile | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::Multipart(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Fixed external contract; processing failures stay generic and
        // the cause goes to the log only.
        let message = match &self {
            ApiError::NoFile => "No file uploaded".to_string(),
            ApiError::Multipart(detail) => format!("Malformed upload request: {detail}"),
            ApiError::PayloadTooLarge { .. } => {
                format!("File exceeds {} limit", format_bytes(MAX_UPLOAD_BYTES))
            }
            ApiError::Upload(_) => {
                error!(error = %self, "Upload processing failed");
                "Error uploading file".to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
