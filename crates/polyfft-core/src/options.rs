//! Multiplication options and configuration.

use crate::constants::MIN_PARALLEL_THRESHOLD;

/// Options for polynomial multiplication.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Half-transform length (in elements) from which the recursive FFT
    /// splits work across threads (0 = sequential).
    pub parallel_threshold: usize,
    /// Drop trailing zero coefficients from the padded product.
    pub trim: bool,
}

impl Options {
    /// Normalize options, raising a non-zero parallel threshold to the
    /// supported minimum.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold != 0 && self.parallel_threshold < MIN_PARALLEL_THRESHOLD {
            self.parallel_threshold = MIN_PARALLEL_THRESHOLD;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.parallel_threshold, 0);
        assert!(!opts.trim);
    }

    #[test]
    fn normalize_keeps_sequential() {
        let opts = Options::default().normalize();
        assert_eq!(opts.parallel_threshold, 0);
    }

    #[test]
    fn normalize_raises_small_thresholds() {
        let opts = Options {
            parallel_threshold: 8,
            ..Default::default()
        };
        assert_eq!(opts.normalize().parallel_threshold, MIN_PARALLEL_THRESHOLD);
    }

    #[test]
    fn normalize_preserves_large_thresholds() {
        let opts = Options {
            parallel_threshold: 1 << 20,
            trim: true,
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.parallel_threshold, 1 << 20);
        assert!(normalized.trim);
    }
}
