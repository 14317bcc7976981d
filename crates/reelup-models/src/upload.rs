//! Upload endpoint wire payloads.
//!
//! Shared between the intake transfer client and the API server so both
//! sides agree on the external contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UploadResponse {
    /// Human-readable status message.
    pub message: String,
    /// Resolved storage path of the artifact.
    pub path: String,
}

/// Structured error payload returned on 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub error: String,
}
