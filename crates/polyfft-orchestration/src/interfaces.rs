//! Orchestration interfaces.

use std::time::Duration;

use polyfft_core::multiplier::PolyError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a multiplication result.
    fn present_result(
        &self,
        algorithm: &str,
        a: &[i64],
        b: &[i64],
        product: &[i64],
        duration: Duration,
        details: bool,
    );

    /// Present a comparison result.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The product coefficients or a structured error.
    pub outcome: Result<Vec<i64>, PolyError>,
    /// Computation duration.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_result() {
        let result = MultiplicationResult {
            algorithm: "FFT".into(),
            outcome: Ok(vec![35, 0]),
            duration: Duration::from_millis(100),
        };
        assert_eq!(result.algorithm, "FFT");
        assert!(result.outcome.is_ok());
    }
}
