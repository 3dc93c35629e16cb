//! Orchestration interfaces.

use std::time::Duration;

use dicecalc_core::engine::DiceError;
use dicecalc_core::Distribution;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        faces: u32,
        num: u32,
        result: &Distribution,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison result.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single engine run.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Engine name.
    pub algorithm: String,
    /// The computed distribution or a structured error.
    pub outcome: Result<Distribution, DiceError>,
    /// Computation duration.
    pub duration: Duration,
}
