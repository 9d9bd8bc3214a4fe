//! Multiplier selection logic.

use std::sync::Arc;

use polyfft_core::constants::SCHOOLBOOK_MAX_LEN;
use polyfft_core::multiplier::{Multiplier, PolyError};
use polyfft_core::registry::MultiplierFactory;
use tracing::debug;

/// Get multipliers to run based on algorithm selection.
///
/// With `"all"`, the schoolbook multiplier is skipped once the longer
/// operand exceeds `SCHOOLBOOK_MAX_LEN` coefficients.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
    operand_len: usize,
) -> Result<Vec<Arc<dyn Multiplier>>, PolyError> {
    match algo {
        "all" => {
            let mut mults = Vec::new();
            for name in factory.available() {
                if name == "schoolbook" && operand_len > SCHOOLBOOK_MAX_LEN {
                    debug!(operand_len, "skipping schoolbook multiplier");
                    continue;
                }
                mults.push(factory.get(name)?);
            }
            Ok(mults)
        }
        name => {
            let mult = factory.get(name)?;
            Ok(vec![mult])
        }
    }
}
