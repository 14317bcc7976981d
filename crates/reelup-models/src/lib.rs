//! Shared data models for the ReelUp backend.
//!
//! This crate provides Serde-serializable types for:
//! - Candidate and accepted upload files
//! - Intake limits (size, duration)
//! - Upload endpoint wire payloads

pub mod file;
pub mod limits;
pub mod upload;
pub mod utils;

// Re-export common types
pub use file::{AcceptedFile, CandidateFile, SelectionSource};
pub use limits::{within_duration_limit, within_size_limit, MAX_DURATION_SECS, MAX_UPLOAD_BYTES};
pub use upload::{ErrorResponse, UploadResponse};
pub use utils::format_bytes;
