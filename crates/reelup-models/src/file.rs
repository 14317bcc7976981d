//! Candidate and accepted upload files.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which entry point produced a candidate file.
///
/// Both sources run the identical validation pipeline; the source is kept
/// for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// File chosen through the file picker.
    Picker,
    /// File dropped onto the drop target.
    Drop,
}

impl SelectionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionSource::Picker => "picker",
            SelectionSource::Drop => "drop",
        }
    }
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-selected video file prior to acceptance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CandidateFile {
    /// Path to the file on the local filesystem.
    pub path: PathBuf,

    /// Declared file name (final path component of the selection).
    pub file_name: String,

    /// Declared media type, guessed from the extension.
    pub content_type: String,

    /// Size in bytes.
    pub size_bytes: u64,
}

impl CandidateFile {
    /// Create a candidate from a filesystem path, reading the size from
    /// file metadata.
    pub fn from_path(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let metadata = std::fs::metadata(&path)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        Ok(Self {
            content_type: content_type_for(&path),
            file_name,
            size_bytes: metadata.len(),
            path,
        })
    }

    /// Promote this candidate with a decoded duration.
    ///
    /// Only the validation pipeline should call this, after both limits
    /// have been checked.
    pub fn accept(self, duration_secs: f64) -> AcceptedFile {
        AcceptedFile {
            candidate: self,
            duration_secs,
        }
    }
}

/// A candidate file that passed both size and duration checks.
///
/// Drives the preview and is the payload for the transfer request. At most
/// one exists at a time (single-file model).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AcceptedFile {
    /// The validated candidate.
    #[serde(flatten)]
    pub candidate: CandidateFile,

    /// Decoded playback duration in seconds.
    pub duration_secs: f64,
}

impl AcceptedFile {
    pub fn path(&self) -> &Path {
        &self.candidate.path
    }

    pub fn file_name(&self) -> &str {
        &self.candidate.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.candidate.content_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.candidate.size_bytes
    }
}

/// Guess a media type from the file extension.
///
/// The server does not verify content types; this only fills the declared
/// type on the multipart request.
fn content_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("mp4" | "m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"not really a video").unwrap();

        let candidate = CandidateFile::from_path(&path).unwrap();
        assert_eq!(candidate.file_name, "clip.mp4");
        assert_eq!(candidate.content_type, "video/mp4");
        assert_eq!(candidate.size_bytes, 18);
    }

    #[test]
    fn test_candidate_from_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = CandidateFile::from_path(dir.path().join("nope.mp4"));
        assert!(result.is_err());
    }

    #[test]
    fn test_content_type_guessing() {
        assert_eq!(content_type_for(Path::new("a.MP4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("a.webm")), "video/webm");
        assert_eq!(content_type_for(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_accept_carries_duration() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("clip.webm");
        std::fs::write(&path, b"x").unwrap();

        let accepted = CandidateFile::from_path(&path).unwrap().accept(12.5);
        assert_eq!(accepted.duration_secs, 12.5);
        assert_eq!(accepted.file_name(), "clip.webm");
        assert_eq!(accepted.size_bytes(), 1);
    }
}
