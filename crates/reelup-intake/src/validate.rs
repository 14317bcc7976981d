//! The validation pipeline.
//!
//! Every file-selection entry point passes through this single function;
//! there is no direct path from selection to acceptance.

use reelup_models::{within_duration_limit, within_size_limit, AcceptedFile, CandidateFile};
use tracing::debug;

use crate::error::{IntakeError, IntakeResult};
use crate::probe::DurationProbe;

/// Validate a candidate file and promote it on success.
///
/// Checks run in order: size (synchronous, from file metadata), then
/// duration (asynchronous probe). The probe is never invoked for a
/// candidate that already failed the size check.
pub async fn validate_candidate(
    candidate: CandidateFile,
    probe: &dyn DurationProbe,
) -> IntakeResult<AcceptedFile> {
    if !within_size_limit(candidate.size_bytes) {
        return Err(IntakeError::FileTooLarge {
            size_bytes: candidate.size_bytes,
        });
    }

    let duration_secs = probe.probe_duration(&candidate.path).await?;

    if !within_duration_limit(duration_secs) {
        return Err(IntakeError::DurationExceeded { duration_secs });
    }

    debug!(
        file_name = %candidate.file_name,
        size_bytes = candidate.size_bytes,
        duration_secs,
        "Candidate accepted"
    );

    Ok(candidate.accept(duration_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::MockDurationProbe;
    use reelup_models::MAX_UPLOAD_BYTES;
    use std::path::PathBuf;

    fn candidate(size_bytes: u64) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from("/videos/clip.mp4"),
            file_name: "clip.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            size_bytes,
        }
    }

    #[tokio::test]
    async fn test_oversized_candidate_skips_probe() {
        let mut probe = MockDurationProbe::new();
        probe.expect_probe_duration().times(0);

        let result = validate_candidate(candidate(MAX_UPLOAD_BYTES + 1), &probe).await;
        assert!(matches!(result, Err(IntakeError::FileTooLarge { .. })));
    }

    #[tokio::test]
    async fn test_overlong_candidate_rejected() {
        let mut probe = MockDurationProbe::new();
        probe
            .expect_probe_duration()
            .times(1)
            .returning(|_| Ok(400.0));

        let result = validate_candidate(candidate(10 * 1024 * 1024), &probe).await;
        assert!(matches!(
            result,
            Err(IntakeError::DurationExceeded { duration_secs }) if duration_secs == 400.0
        ));
    }

    #[tokio::test]
    async fn test_undecodable_candidate_rejected() {
        let mut probe = MockDurationProbe::new();
        probe
            .expect_probe_duration()
            .returning(|_| Err(IntakeError::decode_failed("no video stream")));

        let result = validate_candidate(candidate(1024), &probe).await;
        assert!(matches!(result, Err(IntakeError::DecodeFailed(_))));
    }

    #[tokio::test]
    async fn test_valid_candidate_promoted() {
        let mut probe = MockDurationProbe::new();
        probe.expect_probe_duration().returning(|_| Ok(60.0));

        let accepted = validate_candidate(candidate(50 * 1024 * 1024), &probe)
            .await
            .unwrap();
        assert_eq!(accepted.duration_secs, 60.0);
        assert_eq!(accepted.file_name(), "clip.mp4");
    }

    #[tokio::test]
    async fn test_boundary_values_accepted() {
        let mut probe = MockDurationProbe::new();
        probe.expect_probe_duration().returning(|_| Ok(300.0));

        let accepted = validate_candidate(candidate(MAX_UPLOAD_BYTES), &probe).await;
        assert!(accepted.is_ok());
    }
}
