//! Error handling and exit codes.

use dicecalc_core::constants::exit_codes;
use dicecalc_core::engine::DiceError;

/// Handle a calculation error and return the appropriate exit code.
#[allow(dead_code)]
pub fn handle_error(err: &DiceError) -> i32 {
    match err {
        DiceError::Calculation(_) => exit_codes::ERROR_GENERIC,
        DiceError::InvalidInput(_) => exit_codes::ERROR_USAGE,
        DiceError::Config(_) => exit_codes::ERROR_CONFIG,
        DiceError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}
