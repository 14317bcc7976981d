//! Intake state machine.
//!
//! A single state value replaces the independent mutable flags the UI
//! would otherwise juggle (current file, loading flag, drag flag). At most
//! one candidate is in flight at a time; the preview staging is tied to
//! the accepted selection and released on every exit path.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use reelup_models::{AcceptedFile, CandidateFile, SelectionSource, UploadResponse};

use crate::client::UploadClient;
use crate::error::{IntakeError, IntakeResult};
use crate::preview::PreviewHandle;
use crate::probe::DurationProbe;
use crate::validate::validate_candidate;

/// Observable intake states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    /// No candidate file.
    Empty,
    /// Validation in progress; submission is disabled.
    Validating,
    /// A file passed both checks and is previewable.
    Accepted,
    /// A transfer request is in flight.
    Submitting,
}

/// Outcome of the most recent submission, surfaced to the UI.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Delivered(UploadResponse),
    Failed(String),
}

/// An accepted file together with its staged preview.
#[derive(Debug)]
struct Selection {
    file: AcceptedFile,
    preview: PreviewHandle,
}

/// The intake component driver.
pub struct Intake {
    probe: Arc<dyn DurationProbe>,
    state: IntakeState,
    selection: Option<Selection>,
    last_error: Option<String>,
    last_outcome: Option<SubmitOutcome>,
}

impl Intake {
    /// Create an empty intake with the given duration probe.
    pub fn new(probe: Arc<dyn DurationProbe>) -> Self {
        Self {
            probe,
            state: IntakeState::Empty,
            selection: None,
            last_error: None,
            last_outcome: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> IntakeState {
        self.state
    }

    /// The accepted file, if any.
    pub fn accepted(&self) -> Option<&AcceptedFile> {
        self.selection.as_ref().map(|s| &s.file)
    }

    /// Staged preview path, if a file is accepted.
    pub fn preview_path(&self) -> Option<&Path> {
        self.selection.as_ref().map(|s| s.preview.path())
    }

    /// User-visible message of the last validation failure.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Outcome of the last submission.
    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    /// Whether the UI should show a busy indication and disable submit.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, IntakeState::Validating | IntakeState::Submitting)
    }

    /// Handle a file selection from either entry point.
    ///
    /// Picker and drop selections run the identical validation pipeline.
    /// On success the file is accepted and its preview staged; a replaced
    /// selection releases its preview first. On failure the intake returns
    /// to `Empty` and the error is recorded for the UI.
    pub async fn select(
        &mut self,
        path: impl Into<PathBuf>,
        source: SelectionSource,
    ) -> IntakeResult<()> {
        let candidate = match CandidateFile::from_path(path) {
            Ok(c) => c,
            Err(e) => {
                let err = IntakeError::from(e);
                self.fail_validation(&err, source);
                return Err(err);
            }
        };
        self.select_candidate(candidate, source).await
    }

    /// Validate an already-constructed candidate.
    pub async fn select_candidate(
        &mut self,
        candidate: CandidateFile,
        source: SelectionSource,
    ) -> IntakeResult<()> {
        // Replacing a selection releases its preview before validation
        self.selection = None;
        self.last_error = None;
        self.last_outcome = None;
        self.state = IntakeState::Validating;

        let file_name = candidate.file_name.clone();

        let result = match validate_candidate(candidate, self.probe.as_ref()).await {
            Ok(accepted) => PreviewHandle::acquire(&accepted)
                .map(|preview| Selection {
                    file: accepted,
                    preview,
                })
                .map_err(IntakeError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(selection) => {
                info!(
                    file_name = %file_name,
                    source = %source,
                    duration_secs = selection.file.duration_secs,
                    "File accepted"
                );
                self.selection = Some(selection);
                self.state = IntakeState::Accepted;
                Ok(())
            }
            Err(e) => {
                self.fail_validation(&e, source);
                Err(e)
            }
        }
    }

    /// Explicitly clear the selection, releasing the preview.
    pub fn clear(&mut self) {
        if let Some(selection) = self.selection.take() {
            info!(file_name = %selection.file.file_name(), "Selection cleared");
            selection.preview.close();
        }
        self.last_error = None;
        self.last_outcome = None;
        self.state = IntakeState::Empty;
    }

    /// Submit the accepted file to the server.
    ///
    /// Issues exactly one request. The selection is kept either way; the
    /// outcome is recorded for the UI and the error also returned.
    pub async fn submit(&mut self, client: &UploadClient) -> IntakeResult<UploadResponse> {
        let file = match (&self.state, &self.selection) {
            (IntakeState::Accepted, Some(selection)) => selection.file.clone(),
            _ => return Err(IntakeError::NoSelection),
        };

        self.state = IntakeState::Submitting;
        let result = client.upload(&file).await;
        self.state = IntakeState::Accepted;

        match result {
            Ok(response) => {
                self.last_outcome = Some(SubmitOutcome::Delivered(response.clone()));
                Ok(response)
            }
            Err(e) => {
                warn!(file_name = %file.file_name(), error = %e, "Upload failed");
                self.last_outcome = Some(SubmitOutcome::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    fn fail_validation(&mut self, err: &IntakeError, source: SelectionSource) {
        warn!(source = %source, error = %err, "Validation failed");
        self.selection = None;
        self.state = IntakeState::Empty;
        self.last_error = Some(err.to_string());
    }
}
