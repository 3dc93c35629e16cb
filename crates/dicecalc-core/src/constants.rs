//! Constants for distribution computation thresholds and configuration.

/// Multiplier for the small-array chunk decision in the parallel scan.
///
/// When the half-array is shorter than `SMALL_SCAN_FACTOR * (workers + 1)`,
/// per-chunk coordination overhead dominates and the scan falls back to
/// two chunks.
pub const SMALL_SCAN_FACTOR: usize = 100;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Largest dice count served by the closed-form fast path.
///
/// One die is uniform (`faces` ones) and two dice form the triangle
/// `1..=faces` mirrored; both are emitted directly without convolution.
pub const MAX_BASELINE_DICE: u32 = 2;

/// Exit codes for the `dicecalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid command-line usage (clap's default).
    pub const ERROR_USAGE: i32 = 2;
    /// Engine results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
