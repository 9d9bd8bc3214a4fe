//! Constants for multiplier configuration.

/// Smallest half-transform length (in elements) handed to the rayon pool.
///
/// Requested parallel thresholds below this are raised to it; smaller
/// sub-transforms finish faster than a task can be scheduled.
pub const MIN_PARALLEL_THRESHOLD: usize = 1024;

/// Parallel threshold used when parallelism is requested without a size.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16_384;

/// Largest operand length at which the schoolbook multiplier is still
/// included in `all` runs.
pub const SCHOOLBOOK_MAX_LEN: usize = 1 << 14;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid input coefficients.
    pub const ERROR_INPUT: i32 = 2;
    /// Multiplier results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
