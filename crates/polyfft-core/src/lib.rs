//! # polyfft-core
//!
//! Polynomial multipliers built on the radix-2 FFT engine, a schoolbook
//! reference multiplier, and the registry used to select between them.

pub mod constants;
pub mod fft_based;
pub mod multiplier;
pub mod options;
pub mod registry;
pub mod schoolbook;

// Re-exports
pub use constants::{exit_codes, DEFAULT_PARALLEL_THRESHOLD, MIN_PARALLEL_THRESHOLD};
pub use multiplier::{CoreMultiplier, Multiplier, PolyError, PolyMultiplier};
pub use options::Options;
pub use polyfft_fft::{
    forward_transform, inverse_transform, multiply, trim_trailing_zeros, Complex, FftError,
};
pub use registry::{DefaultFactory, MultiplierFactory};

/// Multiply two polynomials and drop trailing zero coefficients.
///
/// This is a convenience function for simple use cases. For the padded
/// product or a different transform strategy, use the `Multiplier` trait
/// or `polyfft_fft` directly.
///
/// # Example
/// ```
/// assert_eq!(polyfft_core::multiply_trimmed(&[1, 2, 3], &[1, 1]).unwrap(), vec![1, 3, 5, 3]);
/// assert_eq!(polyfft_core::multiply_trimmed(&[5], &[7]).unwrap(), vec![35]);
/// ```
pub fn multiply_trimmed(a: &[i64], b: &[i64]) -> Result<Vec<i64>, FftError> {
    multiply(a, b).map(trim_trailing_zeros)
}
