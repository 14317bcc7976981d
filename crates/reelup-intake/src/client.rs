//! Upload transfer client.
//!
//! One multipart POST per submit. No retry, no progress reporting, no
//! cancellation.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{info, warn};

use reelup_models::{AcceptedFile, ErrorResponse, UploadResponse};

use crate::error::{IntakeError, IntakeResult};

/// HTTP client for the server intake endpoint.
pub struct UploadClient {
    base_url: String,
    client: Client,
}

impl UploadClient {
    /// Create a client for the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Upload an accepted file as a single `video` multipart part.
    ///
    /// Transport errors map to `NetworkFailure`; non-2xx statuses map to
    /// `ServerRejected`, carrying the server's structured error message
    /// when the body has one.
    pub async fn upload(&self, file: &AcceptedFile) -> IntakeResult<UploadResponse> {
        let bytes = tokio::fs::read(file.path()).await?;

        let part = Part::bytes(bytes)
            .file_name(file.file_name().to_string())
            .mime_str(file.content_type())?;
        let form = Form::new().part("video", part);

        let url = format!("{}/api/upload", self.base_url);
        info!(url = %url, file_name = %file.file_name(), size_bytes = file.size_bytes(), "Uploading");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "Upload failed".to_string());
            warn!(status = status.as_u16(), message = %message, "Upload rejected");
            return Err(IntakeError::ServerRejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response.json().await?;
        info!(path = %body.path, "Upload complete");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelup_models::CandidateFile;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn accepted_fixture(dir: &std::path::Path, content: &[u8]) -> AcceptedFile {
        let source = dir.join("clip.mp4");
        tokio::fs::write(&source, content).await.unwrap();
        CandidateFile::from_path(&source).unwrap().accept(60.0)
    }

    #[tokio::test]
    async fn test_upload_sends_one_request_with_original_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "File uploaded successfully",
                "path": "/tmp/clip.mp4"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let accepted = accepted_fixture(dir.path(), b"original byte content").await;

        let client = UploadClient::new(server.uri());
        let response = client.upload(&accepted).await.unwrap();
        assert_eq!(response.message, "File uploaded successfully");
        assert!(response.path.ends_with("clip.mp4"));

        // The multipart body carries the file bytes unmodified
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("original byte content"));
        assert!(body.contains("name=\"video\""));
        assert!(body.contains("filename=\"clip.mp4\""));
    }

    #[tokio::test]
    async fn test_server_rejection_surfaces_structured_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "Error uploading file" })),
            )
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let accepted = accepted_fixture(dir.path(), b"x").await;

        let client = UploadClient::new(server.uri());
        let err = client.upload(&accepted).await.unwrap_err();
        match err {
            IntakeError::ServerRejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Error uploading file");
            }
            other => panic!("expected ServerRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let accepted = accepted_fixture(dir.path(), b"x").await;

        // Reserved port with nothing listening
        let client = UploadClient::new("http://127.0.0.1:9");
        let err = client.upload(&accepted).await.unwrap_err();
        assert!(matches!(err, IntakeError::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_trimmed() {
        let client = UploadClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
