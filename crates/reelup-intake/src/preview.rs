//! Scoped preview resource.
//!
//! An accepted file is previewed from a staged copy in a private temp
//! directory, so the player never holds the original path open. The
//! staging is released exactly once: on explicit `close()` or on drop,
//! covering every exit path including component teardown.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

use reelup_models::AcceptedFile;

/// Handle to a staged preview of an accepted file.
///
/// The staging lives as long as the handle. `close()` consumes the handle,
/// so a released preview cannot be released again.
#[derive(Debug)]
pub struct PreviewHandle {
    dir: TempDir,
    path: PathBuf,
}

impl PreviewHandle {
    /// Stage a preview for the given accepted file.
    ///
    /// Prefers a hard link to avoid copying large videos; falls back to a
    /// copy when the temp dir is on a different filesystem.
    pub fn acquire(file: &AcceptedFile) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(file.file_name());

        if std::fs::hard_link(file.path(), &path).is_err() {
            std::fs::copy(file.path(), &path)?;
        }

        debug!(path = %path.display(), "Preview staged");
        Ok(Self { dir, path })
    }

    /// Path the player should load.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the staging.
    pub fn close(self) {
        debug!(path = %self.path.display(), "Preview released");
        drop(self.dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelup_models::CandidateFile;

    fn accepted_fixture(dir: &Path) -> AcceptedFile {
        let source = dir.join("clip.mp4");
        std::fs::write(&source, b"fake video bytes").unwrap();
        CandidateFile::from_path(&source).unwrap().accept(30.0)
    }

    #[test]
    fn test_acquire_stages_copy() {
        let dir = TempDir::new().unwrap();
        let accepted = accepted_fixture(dir.path());

        let preview = PreviewHandle::acquire(&accepted).unwrap();
        assert!(preview.path().exists());
        assert_eq!(std::fs::read(preview.path()).unwrap(), b"fake video bytes");
    }

    #[test]
    fn test_close_releases_staging() {
        let dir = TempDir::new().unwrap();
        let accepted = accepted_fixture(dir.path());

        let preview = PreviewHandle::acquire(&accepted).unwrap();
        let staged = preview.path().to_path_buf();
        preview.close();
        assert!(!staged.exists());
        // Original is untouched
        assert!(accepted.path().exists());
    }

    #[test]
    fn test_drop_releases_staging() {
        let dir = TempDir::new().unwrap();
        let accepted = accepted_fixture(dir.path());

        let staged = {
            let preview = PreviewHandle::acquire(&accepted).unwrap();
            preview.path().to_path_buf()
        };
        assert!(!staged.exists());
    }
}
