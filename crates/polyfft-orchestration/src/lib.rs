//! # polyfft-orchestration
//!
//! Parallel execution, multiplier selection, and result analysis.

pub mod interfaces;
pub mod multiplier_selection;
pub mod orchestrator;

pub use interfaces::{MultiplicationResult, ResultPresenter};
pub use multiplier_selection::get_multipliers_to_run;
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
