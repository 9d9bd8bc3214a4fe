//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use polyfft_core::multiplier::{Multiplier, PolyError};
use polyfft_core::options::Options;
use tracing::debug;

use crate::interfaces::MultiplicationResult;

/// Run one multiplier and time it.
fn run_one(mult: &dyn Multiplier, a: &[i64], b: &[i64], opts: &Options) -> MultiplicationResult {
    let start = Instant::now();
    let outcome = mult.multiply(a, b, opts);
    let duration = start.elapsed();
    debug!(
        algorithm = mult.name(),
        ok = outcome.is_ok(),
        ?duration,
        "multiplication finished"
    );
    MultiplicationResult {
        algorithm: mult.name().to_string(),
        outcome,
        duration,
    }
}

/// Execute the multiplication with all given multipliers.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &[i64],
    b: &[i64],
    opts: &Options,
) -> Vec<MultiplicationResult> {
    if multipliers.len() == 1 {
        // Single multiplier: run directly
        return vec![run_one(multipliers[0].as_ref(), a, b, opts)];
    }

    // Multiple multipliers: run in parallel using rayon
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    multipliers
        .par_iter()
        .map(|mult| run_one(mult.as_ref(), a, b, opts))
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Fails with the first error when no multiplier succeeded, and with
/// `PolyError::Mismatch` when two successful products differ.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), PolyError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first_value) = valid.next() else {
        return match results.iter().find_map(|r| r.outcome.as_ref().err()) {
            Some(err) => Err(err.clone()),
            None => Err(PolyError::Config("no multipliers were run".into())),
        };
    };

    // Compare all results to the first valid one
    if valid.any(|value| value != first_value) {
        return Err(PolyError::Mismatch);
    }

    Ok(())
}
