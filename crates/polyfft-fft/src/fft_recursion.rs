//! Recursive FFT implementation with optional parallelism.
//!
//! Each level splits the input into even and odd halves, transforms them
//! with the squared root, and merges with butterflies. Halves at or above
//! `parallel_threshold` elements are transformed concurrently with
//! `rayon::join`; a threshold of 0 keeps everything on the calling thread.

use std::f64::consts::PI;

use tracing::trace;

use crate::complex::Complex;
use crate::error::FftError;
use crate::fft_core::{normalize, validate_len};

/// Recursive forward transform.
#[allow(clippy::cast_precision_loss)]
pub fn fft_recursive(
    data: &[Complex],
    parallel_threshold: usize,
) -> Result<Vec<Complex>, FftError> {
    validate_len(data.len())?;
    let angle = 2.0 * PI / data.len() as f64;
    let wn = Complex::from_polar(1.0, angle);
    Ok(generic_fft(data.to_vec(), wn, parallel_threshold))
}

/// Recursive normalized inverse transform.
#[allow(clippy::cast_precision_loss)]
pub fn ifft_recursive(
    data: &[Complex],
    parallel_threshold: usize,
) -> Result<Vec<Complex>, FftError> {
    validate_len(data.len())?;
    let angle = 2.0 * PI / data.len() as f64;
    let wn = Complex::from_polar(1.0, angle).conj();
    let mut out = generic_fft(data.to_vec(), wn, parallel_threshold);
    normalize(&mut out);
    Ok(out)
}

/// Transform `data` using `wn` as the principal n-th root of unity.
fn generic_fft(data: Vec<Complex>, wn: Complex, parallel_threshold: usize) -> Vec<Complex> {
    let n = data.len();
    if n == 1 {
        return data;
    }

    let half = n / 2;
    let (even, odd): (Vec<Complex>, Vec<Complex>) =
        data.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip();

    // The half-size problems use w² as their principal root.
    let w_sq = wn.square();
    let (even, odd) = if parallel_threshold > 0 && half >= parallel_threshold {
        trace!(n, "parallel split");
        rayon::join(
            || generic_fft(even, w_sq, parallel_threshold),
            || generic_fft(odd, w_sq, parallel_threshold),
        )
    } else {
        (
            generic_fft(even, w_sq, parallel_threshold),
            generic_fft(odd, w_sq, parallel_threshold),
        )
    };

    let mut out = data;
    let mut p = Complex::ONE;
    for k in 0..half {
        let t = p * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
        p *= wn;
    }
    out
}
