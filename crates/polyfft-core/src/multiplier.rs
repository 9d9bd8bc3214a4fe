//! Multiplier traits and the `PolyMultiplier` decorator.
//!
//! `Multiplier` is the public trait consumed by orchestration.
//! `CoreMultiplier` is the internal trait implemented by algorithms.
//! `PolyMultiplier` is a decorator that handles empty operands and trimming.

use std::sync::Arc;

use polyfft_fft::{trim_trailing_zeros, FftError};
use tracing::trace;

use crate::options::Options;

/// Error type for polynomial multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    /// The transform or coefficient conversion failed.
    #[error(transparent)]
    Fft(#[from] FftError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,
}

/// Public trait for polynomial multipliers, consumed by orchestration.
pub trait Multiplier: Send + Sync {
    /// Multiply `a` by `b`, coefficients in ascending order of degree.
    fn multiply(&self, a: &[i64], b: &[i64], opts: &Options) -> Result<Vec<i64>, PolyError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
///
/// Operands are non-empty. The returned product has
/// `polyfft_fft::fft_poly::needed_length(a.len(), b.len())` coefficients.
/// Wrapped by `PolyMultiplier` which adds the empty-operand path and trimming.
pub trait CoreMultiplier: Send + Sync {
    fn multiply_core(&self, a: &[i64], b: &[i64], opts: &Options)
        -> Result<Vec<i64>, PolyError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreMultiplier`.
pub struct PolyMultiplier {
    inner: Arc<dyn CoreMultiplier>,
}

impl PolyMultiplier {
    /// Create a new `PolyMultiplier` wrapping the given core multiplier.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreMultiplier>) -> Self {
        Self { inner }
    }
}

impl Multiplier for PolyMultiplier {
    fn multiply(&self, a: &[i64], b: &[i64], opts: &Options) -> Result<Vec<i64>, PolyError> {
        // The product with an empty polynomial is empty
        if a.is_empty() || b.is_empty() {
            return Ok(Vec::new());
        }

        trace!(multiplier = self.inner.name(), a_len = a.len(), b_len = b.len());
        let product = self.inner.multiply_core(a, b, opts)?;

        if opts.trim {
            Ok(trim_trailing_zeros(product))
        } else {
            Ok(product)
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
