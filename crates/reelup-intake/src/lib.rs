//! Client intake pipeline.
//!
//! This crate provides:
//! - The validation pipeline every selected file passes through
//!   (size check, then duration probe)
//! - The intake state machine (`Empty -> Validating -> Accepted -> Submitting`)
//! - The scoped preview resource tied to the accepted selection
//! - The upload transfer client (one multipart POST per submit)

pub mod client;
pub mod error;
pub mod preview;
pub mod probe;
pub mod state;
pub mod validate;

pub use client::UploadClient;
pub use error::{IntakeError, IntakeResult};
pub use preview::PreviewHandle;
pub use probe::{DurationProbe, FfprobeDurationProbe};
pub use state::{Intake, IntakeState, SubmitOutcome};
pub use validate::validate_candidate;
