//! Shared helpers.

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= GIB {
        format!("{:.2} GB", bytes_f / GIB)
    } else if bytes_f >= MIB {
        format!("{:.2} MB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.2} KB", bytes_f / KIB)
    } else {
        format!("{} B", bytes)
    }
}
