//! Upload intake handler.
//!
//! Accepts one multipart form submission with a `video` field, persists
//! the bytes under the declared file name in the upload directory, and
//! returns the resolved storage path. Concurrent uploads sharing a name
//! are last-writer-wins; there is no locking and no dedup.

use axum::extract::{Multipart, State};
use axum::Json;
use std::path::Path;
use tracing::info;

use reelup_models::{UploadResponse, MAX_UPLOAD_BYTES};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field name carrying the video bytes.
const VIDEO_FIELD: &str = "video";

/// POST /api/upload
pub async fn upload_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut received: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| VIDEO_FIELD.to_string());
        let data = field.bytes().await?;
        received = Some((file_name, data));
        break;
    }

    let (file_name, data) = received.ok_or(ApiError::NoFile)?;

    // The client enforces the same cap, but the server does not trust it
    if data.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(ApiError::PayloadTooLarge {
            size_bytes: data.len() as u64,
        });
    }

    let file_name = sanitize_file_name(&file_name);
    let path = state.upload_dir.join(&file_name);
    tokio::fs::write(&path, &data).await?;

    info!(
        file_name = %file_name,
        size_bytes = data.len(),
        path = %path.display(),
        "Upload stored"
    );

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        path: path.display().to_string(),
    }))
}

/// Reduce a declared file name to its final path component.
///
/// The declared name is caller-controlled; a name like `../../etc/cron.d/x`
/// must not escape the upload directory.
fn sanitize_file_name(declared: &str) -> String {
    Path::new(declared)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty() && n != "." && n != "..")
        .unwrap_or_else(|| VIDEO_FIELD.to_string())
}
