//! Progress tracking types and utilities.

/// Progress update sent from engines to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Engine index (for multi-engine runs).
    pub calc_index: usize,
    /// Name of the engine producing this update.
    pub algorithm: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Current convolution step number.
    pub current_step: u64,
    /// Total number of convolution steps.
    pub total_steps: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(
        calc_index: usize,
        algorithm: &'static str,
        progress: f64,
        current: u64,
        total: u64,
    ) -> Self {
        Self {
            calc_index,
            algorithm,
            progress,
            current_step: current,
            total_steps: total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(calc_index: usize, algorithm: &'static str) -> Self {
        Self {
            calc_index,
            algorithm,
            progress: 1.0,
            current_step: 0,
            total_steps: 0,
            done: true,
        }
    }
}

/// Number of convolution steps required for `num` dice.
///
/// One and two dice are closed forms; every further die costs one step.
#[must_use]
pub fn total_steps(num: u32) -> u64 {
    u64::from(num.saturating_sub(2))
}
