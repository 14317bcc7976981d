//! Application state.

use std::path::PathBuf;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    /// Resolved upload directory, created at startup.
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Create new application state, ensuring the upload directory exists.
    pub fn new(config: ApiConfig) -> std::io::Result<Self> {
        let upload_dir = config.upload_dir.clone();
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self { config, upload_dir })
    }
}
