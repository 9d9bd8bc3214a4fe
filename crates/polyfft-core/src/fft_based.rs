//! FFT-based polynomial multipliers.

use polyfft_fft::{multiply_with, TransformStrategy};

use crate::multiplier::{CoreMultiplier, PolyError};
use crate::options::Options;

/// FFT multiplier using the iterative in-place transform.
///
/// # Example
/// ```
/// use polyfft_core::fft_based::FftMultiplier;
/// use polyfft_core::multiplier::CoreMultiplier;
/// use polyfft_core::options::Options;
///
/// let product = FftMultiplier::new()
///     .multiply_core(&[1, 2, 3], &[1, 1], &Options::default())
///     .unwrap();
/// assert_eq!(product, vec![1, 3, 5, 3, 0, 0, 0, 0]);
/// ```
pub struct FftMultiplier;

impl FftMultiplier {
    /// Create a new iterative FFT multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FftMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for FftMultiplier {
    fn multiply_core(
        &self,
        a: &[i64],
        b: &[i64],
        _opts: &Options,
    ) -> Result<Vec<i64>, PolyError> {
        Ok(multiply_with(a, b, TransformStrategy::Iterative)?)
    }

    fn name(&self) -> &str {
        "FFT"
    }
}

/// FFT multiplier using the recursive even/odd transform.
///
/// Honors `Options::parallel_threshold`.
pub struct RecursiveFftMultiplier;

impl RecursiveFftMultiplier {
    /// Create a new recursive FFT multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RecursiveFftMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for RecursiveFftMultiplier {
    fn multiply_core(
        &self,
        a: &[i64],
        b: &[i64],
        opts: &Options,
    ) -> Result<Vec<i64>, PolyError> {
        let strategy = TransformStrategy::Recursive {
            parallel_threshold: opts.parallel_threshold,
        };
        Ok(multiply_with(a, b, strategy)?)
    }

    fn name(&self) -> &str {
        "RecursiveFFT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterative_small_product() {
        let got = FftMultiplier::new()
            .multiply_core(&[5], &[7], &Options::default())
            .unwrap();
        assert_eq!(got, vec![35, 0]);
    }

    #[test]
    fn recursive_matches_iterative() {
        let a: Vec<i64> = (0..100).map(|i| (i * i) % 97 - 48).collect();
        let b: Vec<i64> = (0..37).map(|i| 3 * i - 50).collect();
        let opts = Options::default();
        let iterative = FftMultiplier::new().multiply_core(&a, &b, &opts).unwrap();
        let recursive = RecursiveFftMultiplier::new()
            .multiply_core(&a, &b, &opts)
            .unwrap();
        assert_eq!(iterative, recursive);
    }

    #[test]
    fn recursive_parallel_matches_sequential() {
        let a: Vec<i64> = (0..3000).map(|i| (i * 31) % 19 - 9).collect();
        let sequential = RecursiveFftMultiplier::new()
            .multiply_core(&a, &a, &Options::default())
            .unwrap();
        let parallel = RecursiveFftMultiplier::new()
            .multiply_core(
                &a,
                &a,
                &Options {
                    parallel_threshold: 1024,
                    ..Options::default()
                },
            )
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn names() {
        assert_eq!(FftMultiplier::new().name(), "FFT");
        assert_eq!(RecursiveFftMultiplier::new().name(), "RecursiveFFT");
    }
}
