//! Error handling and exit codes.

use polyfft_core::constants::exit_codes;
use polyfft_core::multiplier::PolyError;

use crate::config::InputError;

/// Map a multiplication error to the process exit code.
pub fn handle_error(err: &PolyError) -> i32 {
    match err {
        PolyError::Fft(_) => exit_codes::ERROR_GENERIC,
        PolyError::Config(_) => exit_codes::ERROR_CONFIG,
        PolyError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Map any application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<PolyError>() {
        handle_error(err)
    } else if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_INPUT
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Exit code for the outcome of a whole run.
pub fn run_exit_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code(err),
    }
}
