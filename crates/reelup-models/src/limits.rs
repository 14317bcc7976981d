//! Intake limits.
//!
//! These are compile-time constants, not runtime configuration. The same
//! values are enforced client-side (before a candidate is promoted) and
//! server-side (before the artifact is written).

/// Maximum upload size in bytes (100 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 104_857_600;

/// Maximum video duration in seconds (5 minutes).
pub const MAX_DURATION_SECS: f64 = 300.0;

/// Check whether a byte size is within the upload limit.
pub fn within_size_limit(size_bytes: u64) -> bool {
    size_bytes <= MAX_UPLOAD_BYTES
}

/// Check whether a decoded duration is within the duration limit.
pub fn within_duration_limit(duration_secs: f64) -> bool {
    duration_secs <= MAX_DURATION_SECS
}
