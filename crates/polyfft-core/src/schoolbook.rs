//! Direct O(n·m) convolution, used as the reference multiplier.

use polyfft_fft::fft_poly::needed_length;
use polyfft_fft::FftError;

use crate::multiplier::{CoreMultiplier, PolyError};
use crate::options::Options;

/// Coefficients of `a · b`, computed with checked arithmetic.
///
/// The result has `a.len() + b.len() - 1` coefficients (empty if either
/// operand is empty).
pub fn convolve(a: &[i64], b: &[i64]) -> Result<Vec<i64>, FftError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            let sum = x
                .checked_mul(y)
                .and_then(|p| out[i + j].checked_add(p))
                .ok_or_else(|| {
                    FftError::Overflow(format!("coefficient of x^{} exceeds i64", i + j))
                })?;
            out[i + j] = sum;
        }
    }
    Ok(out)
}

/// Schoolbook multiplier.
///
/// Pads its result to the same length as the FFT multipliers so results
/// can be compared directly.
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    /// Create a new schoolbook multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchoolbookMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for SchoolbookMultiplier {
    fn multiply_core(
        &self,
        a: &[i64],
        b: &[i64],
        _opts: &Options,
    ) -> Result<Vec<i64>, PolyError> {
        let mut product = convolve(a, b)?;
        product.resize(needed_length(a.len(), b.len()), 0);
        Ok(product)
    }

    fn name(&self) -> &str {
        "Schoolbook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convolve_small() {
        assert_eq!(convolve(&[1, 2, 3], &[1, 1]).unwrap(), vec![1, 3, 5, 3]);
        assert_eq!(convolve(&[5], &[7]).unwrap(), vec![35]);
        assert!(convolve(&[], &[7]).unwrap().is_empty());
    }

    #[test]
    fn convolve_overflow() {
        let err = convolve(&[i64::MAX], &[2]).unwrap_err();
        assert!(matches!(err, FftError::Overflow(_)));
    }

    #[test]
    fn schoolbook_pads_like_fft() {
        let got = SchoolbookMultiplier::new()
            .multiply_core(&[1, 2, 3], &[1, 1], &Options::default())
            .unwrap();
        assert_eq!(got, vec![1, 3, 5, 3, 0, 0, 0, 0]);
    }
}
