//! Axum HTTP API server.
//!
//! This crate provides:
//! - The upload intake endpoint (multipart receive, temp-dir persist)
//! - Server-side re-enforcement of the upload size limit
//! - Request logging, CORS, and body-size limits

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
