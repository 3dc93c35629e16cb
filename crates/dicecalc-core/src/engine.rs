//! Engine traits and the `DiceCalculator` decorator.
//!
//! `Engine` is the public trait consumed by orchestration.
//! `CoreEngine` is the internal trait implemented by the convolution
//! algorithms. `DiceCalculator` is a decorator that adds input validation
//! and the closed-form fast path for one and two dice.

use std::sync::Arc;

use crate::constants::MAX_BASELINE_DICE;
use crate::distribution::Distribution;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

/// Error type for distribution calculations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DiceError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input (faces or dice count below 1).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Results from different engines don't match.
    #[error("result mismatch between engines")]
    Mismatch,
}

/// Public trait for distribution engines, consumed by orchestration.
pub trait Engine: Send + Sync {
    /// Compute the distribution for `num` dice of `faces` faces.
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        faces: u32,
        num: u32,
        opts: &Options,
    ) -> Result<Distribution, DiceError>;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}

/// Internal trait for convolution implementations.
/// Wrapped by `DiceCalculator`, which adds validation and the fast path;
/// implementations may assume `faces >= 1` and `num >= 3`.
pub trait CoreEngine: Send + Sync {
    /// Run the convolution loop for `num >= 3` dice.
    fn convolve_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        faces: u32,
        num: u32,
        opts: &Options,
    ) -> Result<Distribution, DiceError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreEngine` with validation and fast paths.
pub struct DiceCalculator {
    inner: Arc<dyn CoreEngine>,
}

impl DiceCalculator {
    /// Create a new `DiceCalculator` wrapping the given core engine.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreEngine>) -> Self {
        Self { inner }
    }
}

impl Engine for DiceCalculator {
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        faces: u32,
        num: u32,
        opts: &Options,
    ) -> Result<Distribution, DiceError> {
        // Boundary validation: nothing below runs on bad input
        if faces < 1 {
            return Err(DiceError::InvalidInput(format!(
                "faces must be >= 1, got {faces}"
            )));
        }
        if num < 1 {
            return Err(DiceError::InvalidInput(format!(
                "number of dice must be >= 1, got {num}"
            )));
        }

        // Fast path: one and two dice are closed forms
        if num <= MAX_BASELINE_DICE {
            observer.on_progress(&ProgressUpdate::done(calc_index, self.inner.name()));
            return Ok(Distribution::baseline(faces, num));
        }

        self.inner
            .convolve_core(observer, calc_index, faces, num, opts)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
