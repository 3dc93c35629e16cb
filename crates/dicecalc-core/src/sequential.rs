//! Sequential convolution engine, the correctness oracle.
//!
//! Builds the distribution die-by-die: extend the half-array with mirrored
//! values, convert to windowed differences, re-accumulate with a prefix
//! sum. Each step is linear in the array length, independent of `faces`.

use crate::distribution::Distribution;
use crate::engine::{CoreEngine, DiceError};
use crate::layout::{self, StepLayout};
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{self, ProgressUpdate};
use crate::scan;

/// Single-threaded windowed convolution.
///
/// # Example
/// ```
/// use dicecalc_core::sequential::SequentialConvolution;
/// use dicecalc_core::engine::CoreEngine;
/// use dicecalc_core::observers::NoOpObserver;
/// use dicecalc_core::options::Options;
///
/// let engine = SequentialConvolution::new();
/// let dist = engine
///     .convolve_core(&NoOpObserver::new(), 0, 6, 3, &Options::default())
///     .unwrap();
/// assert_eq!(dist.max_count().to_string(), "27");
/// ```
pub struct SequentialConvolution;

impl SequentialConvolution {
    /// Create a new sequential engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialConvolution {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreEngine for SequentialConvolution {
    fn convolve_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        faces: u32,
        num: u32,
        _opts: &Options,
    ) -> Result<Distribution, DiceError> {
        debug_assert!(faces >= 1 && num >= 3);

        let mut half = layout::two_dice_half(faces);
        half.reserve(layout::half_len(faces, num) - half.len());

        let frozen = observer.freeze();
        let total_steps = progress::total_steps(num);
        for dice in 3..=num {
            let step = StepLayout::for_step(faces, dice);
            step.extend(&mut half);
            scan::difference_pass(&mut half, faces as usize);
            scan::inclusive_scan(&mut half);

            let current = u64::from(dice - 2);
            #[allow(clippy::cast_precision_loss)]
            let progress = current as f64 / total_steps as f64;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    calc_index,
                    "Sequential",
                    progress,
                    current,
                    total_steps,
                ));
            }
        }

        observer.on_progress(&ProgressUpdate::done(calc_index, "Sequential"));
        Ok(Distribution::from_half(faces, num, half))
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}
