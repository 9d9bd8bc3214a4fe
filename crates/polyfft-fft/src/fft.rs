//! Public FFT and polynomial multiplication API.
//!
//! The transforms validate their input length and return fresh vectors;
//! the caller's slices are never modified.

use tracing::debug;

use crate::complex::Complex;
use crate::error::FftError;
use crate::fft_core::{fft_forward_in_place, fft_inverse_in_place};
use crate::fft_poly::{
    check_exact_range, needed_length, pointwise_multiply, pointwise_square, round_all, to_complex,
    Coefficient,
};
use crate::fft_recursion::{fft_recursive, ifft_recursive};

/// How the radix-2 transform is evaluated. Both produce the same values
/// up to floating-point rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransformStrategy {
    /// In-place bit-reversal permutation followed by butterfly stages.
    #[default]
    Iterative,
    /// Even/odd splitting recursion. Sub-problems with at least
    /// `parallel_threshold` elements run on the rayon pool (0 disables).
    Recursive { parallel_threshold: usize },
}

/// Forward transform of a power-of-two length sequence.
pub fn forward_transform(x: &[Complex]) -> Result<Vec<Complex>, FftError> {
    forward_transform_with(x, TransformStrategy::default())
}

/// Normalized inverse transform of a power-of-two length sequence.
pub fn inverse_transform(x: &[Complex]) -> Result<Vec<Complex>, FftError> {
    inverse_transform_with(x, TransformStrategy::default())
}

/// Forward transform using the given strategy.
pub fn forward_transform_with(
    x: &[Complex],
    strategy: TransformStrategy,
) -> Result<Vec<Complex>, FftError> {
    match strategy {
        TransformStrategy::Iterative => {
            let mut out = x.to_vec();
            fft_forward_in_place(&mut out)?;
            Ok(out)
        }
        TransformStrategy::Recursive { parallel_threshold } => {
            fft_recursive(x, parallel_threshold)
        }
    }
}

/// Inverse transform using the given strategy.
pub fn inverse_transform_with(
    x: &[Complex],
    strategy: TransformStrategy,
) -> Result<Vec<Complex>, FftError> {
    match strategy {
        TransformStrategy::Iterative => {
            let mut out = x.to_vec();
            fft_inverse_in_place(&mut out)?;
            Ok(out)
        }
        TransformStrategy::Recursive { parallel_threshold } => {
            ifft_recursive(x, parallel_threshold)
        }
    }
}

/// Multiply two polynomials with `i64` coefficients.
///
/// The result has `2 * next_power_of_two(max(a.len(), b.len()))`
/// coefficients; entries past the true degree are zero. An empty operand
/// gives an empty product.
pub fn multiply(a: &[i64], b: &[i64]) -> Result<Vec<i64>, FftError> {
    multiply_with(a, b, TransformStrategy::default())
}

/// Multiply two polynomials with `i32` coefficients.
pub fn multiply_i32(a: &[i32], b: &[i32]) -> Result<Vec<i32>, FftError> {
    multiply_with(a, b, TransformStrategy::default())
}

/// Square a polynomial, reusing a single forward transform.
pub fn square(a: &[i64]) -> Result<Vec<i64>, FftError> {
    square_with(a, TransformStrategy::default())
}

/// FFT multiplication core.
pub fn multiply_with<T: Coefficient>(
    a: &[T],
    b: &[T],
    strategy: TransformStrategy,
) -> Result<Vec<T>, FftError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }

    check_exact_range(a, b)?;

    let n = needed_length(a.len(), b.len());
    debug!(a_len = a.len(), b_len = b.len(), n, ?strategy, "fft multiply");

    // Pad into the transform domain
    let padded_a = to_complex(a, n);
    let padded_b = to_complex(b, n);

    // Forward transforms
    let fa = forward_transform_with(&padded_a, strategy)?;
    let fb = forward_transform_with(&padded_b, strategy)?;

    // Pointwise multiply in transform domain
    let product = pointwise_multiply(&fa, &fb)?;

    // Inverse transform and round back to integers
    let coeffs = inverse_transform_with(&product, strategy)?;
    round_all(&coeffs)
}

/// FFT squaring with transform reuse.
///
/// Only performs one forward transform instead of two.
pub fn square_with<T: Coefficient>(
    a: &[T],
    strategy: TransformStrategy,
) -> Result<Vec<T>, FftError> {
    if a.is_empty() {
        return Ok(Vec::new());
    }

    check_exact_range(a, a)?;

    let n = needed_length(a.len(), a.len());
    debug!(a_len = a.len(), n, ?strategy, "fft square");

    let mut transformed = forward_transform_with(&to_complex(a, n), strategy)?;
    pointwise_square(&mut transformed);
    let coeffs = inverse_transform_with(&transformed, strategy)?;
    round_all(&coeffs)
}
