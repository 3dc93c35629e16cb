//! # dicecalc-core
//!
//! Core library for the DiceCalc-rs exact dice-sum distribution calculator.
//! Implements the incremental windowed convolution (difference/prefix-sum)
//! algorithm in sequential and thread-parallel variants.

pub mod constants;
pub mod distribution;
pub mod engine;
pub(crate) mod layout;
pub mod memory_budget;
pub mod observer;
pub mod observers;
pub mod options;
pub mod parallel;
pub mod progress;
pub mod registry;
pub mod scan;
pub mod sequential;

// Re-exports
pub use constants::{exit_codes, MAX_BASELINE_DICE, PROGRESS_REPORT_THRESHOLD};
pub use distribution::Distribution;
pub use engine::{CoreEngine, DiceCalculator, DiceError, Engine};
pub use observer::{FrozenObserver, ProgressObserver};
pub use options::Options;
pub use progress::ProgressUpdate;
pub use registry::{DefaultFactory, EngineFactory};
pub use scan::ScanPartition;

use std::sync::Arc;

/// Compute the exact sum distribution of `num` dice with `faces` faces.
///
/// This is a convenience function for simple use cases. For advanced
/// configuration (engine choice, worker count, progress reporting), use
/// the `Engine` trait directly.
///
/// # Example
/// ```
/// let dist = dicecalc_core::distribution(6, 2).unwrap();
/// assert_eq!(dist.max_count().to_string(), "6");
/// assert_eq!(dist.count(7).unwrap().to_string(), "6");
/// assert_eq!(dist.total().to_string(), "36");
/// ```
pub fn distribution(faces: u32, num: u32) -> Result<Distribution, DiceError> {
    use observers::NoOpObserver;
    use parallel::ParallelConvolution;

    let calc = DiceCalculator::new(Arc::new(ParallelConvolution::new()));
    let observer = NoOpObserver::new();
    let opts = Options::default();
    calc.calculate(&observer, 0, faces, num, &opts)
}
