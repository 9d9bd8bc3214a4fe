//! Core FFT transform: iterative radix-2 Cooley-Tukey over complex values.

use tracing::trace;

use crate::complex::Complex;
use crate::error::FftError;
use crate::fft_cache::{global_cache, Direction};

/// Check that `n` is a usable transform length: non-zero and a power of two.
pub fn validate_len(n: usize) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::InvalidArgument(
            "transform length must be at least 1".into(),
        ));
    }
    if !n.is_power_of_two() {
        return Err(FftError::InvalidArgument(format!(
            "transform length {n} is not a power of two"
        )));
    }
    Ok(())
}

/// Perform the forward transform in-place.
///
/// Uses the principal root `w = e^(2πi/n)`, so `X[k] = Σ x[j]·w^(jk)`.
pub fn fft_forward_in_place(data: &mut [Complex]) -> Result<(), FftError> {
    validate_len(data.len())?;
    transform(data, Direction::Forward);
    Ok(())
}

/// Perform the normalized inverse transform in-place.
///
/// Runs the transform with the conjugate root, then divides by n.
pub fn fft_inverse_in_place(data: &mut [Complex]) -> Result<(), FftError> {
    validate_len(data.len())?;
    transform(data, Direction::Inverse);
    normalize(data);
    Ok(())
}

/// Divide every element by the sequence length.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn normalize(data: &mut [Complex]) {
    let n = data.len() as f64;
    for elem in data.iter_mut() {
        *elem = elem.div_scalar(n);
    }
}

/// Unnormalized transform. `data.len()` must already be validated.
fn transform(data: &mut [Complex], direction: Direction) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    trace!(n, ?direction, "iterative transform");

    bit_reverse_permutation(data);

    let twiddles = global_cache().get_or_compute(n, direction);

    // Stage of width `size` uses w_size^j = w_n^(j * n / size).
    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let stride = n / size;

        for start in (0..n).step_by(size) {
            for j in 0..half {
                let w = twiddles[j * stride];
                // Split to get simultaneous mutable access to [start+j] and [start+j+half]
                let (lo, hi) = data.split_at_mut(start + j + half);
                let even = lo[start + j];
                let odd = w * hi[0];
                lo[start + j] = even + odd;
                hi[0] = even - odd;
            }
        }
        size *= 2;
    }
}

/// Bit-reversal permutation.
fn bit_reverse_permutation(data: &mut [Complex]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
