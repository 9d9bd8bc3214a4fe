//! Coefficient conversion and pointwise operations for FFT multiplication.

use std::fmt::Debug;

use num_traits::PrimInt;

use crate::complex::Complex;
use crate::error::FftError;

/// Integer types usable as polynomial coefficients.
pub trait Coefficient: PrimInt + Debug + Send + Sync {
    /// Widen to `f64` for the transform.
    fn as_f64(self) -> f64;
}

impl Coefficient for i32 {
    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Coefficient for i64 {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// Largest product coefficient magnitude an `f64` transform reproduces exactly.
pub const MAX_EXACT_MAGNITUDE: u128 = 1 << 53;

/// Upper bound on any coefficient magnitude of `a * b`:
/// `max|a| * max|b| * min(a.len(), b.len())`.
#[must_use]
pub fn product_magnitude_bound<T: Coefficient>(a: &[T], b: &[T]) -> u128 {
    let max_abs = |xs: &[T]| {
        xs.iter()
            .filter_map(|x| x.to_i128())
            .map(i128::unsigned_abs)
            .max()
            .unwrap_or(0)
    };
    let terms = a.len().min(b.len()) as u128;
    max_abs(a)
        .saturating_mul(max_abs(b))
        .saturating_mul(terms)
}

/// Reject operands whose product could exceed the exact `f64` range.
pub fn check_exact_range<T: Coefficient>(a: &[T], b: &[T]) -> Result<(), FftError> {
    let bound = product_magnitude_bound(a, b);
    if bound > MAX_EXACT_MAGNITUDE {
        return Err(FftError::Overflow(format!(
            "product coefficients may reach {bound}, beyond the exact range 2^53"
        )));
    }
    Ok(())
}

/// Smallest power of two `>= n` (1 for `n == 0`).
#[must_use]
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Transform length used to multiply polynomials with `a_len` and `b_len`
/// coefficients: twice the next power of two of the longer operand.
///
/// Always at least `a_len + b_len - 1`, so the cyclic product does not wrap.
#[must_use]
pub fn needed_length(a_len: usize, b_len: usize) -> usize {
    next_power_of_two(a_len.max(b_len)) << 1
}

/// Extend `values` with zeros up to `len` elements.
pub fn pad_to(values: &mut Vec<Complex>, len: usize) {
    if values.len() < len {
        values.resize(len, Complex::ZERO);
    }
}

/// Convert integer coefficients into complex values padded with zeros to `len`.
#[must_use]
pub fn to_complex<T: Coefficient>(coeffs: &[T], len: usize) -> Vec<Complex> {
    let mut values = Vec::with_capacity(len.max(coeffs.len()));
    values.extend(coeffs.iter().map(|&c| Complex::from_real(c.as_f64())));
    pad_to(&mut values, len);
    values
}

/// Round every element back to an integer coefficient.
pub fn round_all<T: Coefficient>(values: &[Complex]) -> Result<Vec<T>, FftError> {
    values.iter().map(|v| v.round_to::<T>()).collect()
}

/// Pointwise product of two transformed sequences.
pub fn pointwise_multiply(a: &[Complex], b: &[Complex]) -> Result<Vec<Complex>, FftError> {
    if a.len() != b.len() {
        return Err(FftError::InvalidArgument(format!(
            "pointwise multiply of sequences with lengths {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x * y).collect())
}

/// Square every element in place.
pub fn pointwise_square(values: &mut [Complex]) {
    for v in values.iter_mut() {
        *v = v.square();
    }
}

/// Drop trailing zero coefficients.
#[must_use]
pub fn trim_trailing_zeros<T: Coefficient>(mut coeffs: Vec<T>) -> Vec<T> {
    while coeffs.last().is_some_and(|c| c.is_zero()) {
        coeffs.pop();
    }
    coeffs
}
