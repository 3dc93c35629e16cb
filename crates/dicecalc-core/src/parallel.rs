//! Thread-parallel convolution engine.
//!
//! Same driver loop as the sequential engine; the windowed-sum passes are
//! replaced by their parallel counterparts in [`crate::scan`]. The chunk
//! partition is recomputed every step as the half-array grows, from a
//! worker count resolved once per calculation.

use crate::distribution::Distribution;
use crate::engine::{CoreEngine, DiceError};
use crate::layout::{self, StepLayout};
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{self, ProgressUpdate};
use crate::scan::{self, ScanPartition};

/// Parallel windowed convolution via residue classes and a chunked scan.
///
/// Output is entry-for-entry identical to [`SequentialConvolution`] for
/// every input and every configured worker count: `BigInt` arithmetic is
/// exact, and the partition keeps all parallel writes on disjoint ranges.
///
/// [`SequentialConvolution`]: crate::sequential::SequentialConvolution
///
/// # Example
/// ```
/// use dicecalc_core::parallel::ParallelConvolution;
/// use dicecalc_core::engine::CoreEngine;
/// use dicecalc_core::observers::NoOpObserver;
/// use dicecalc_core::options::Options;
///
/// let engine = ParallelConvolution::new();
/// let dist = engine
///     .convolve_core(&NoOpObserver::new(), 0, 2, 3, &Options::default())
///     .unwrap();
/// assert_eq!(dist.count(4).unwrap().to_string(), "3");
/// ```
pub struct ParallelConvolution;

impl ParallelConvolution {
    /// Create a new parallel engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParallelConvolution {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreEngine for ParallelConvolution {
    fn convolve_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        faces: u32,
        num: u32,
        opts: &Options,
    ) -> Result<Distribution, DiceError> {
        debug_assert!(faces >= 1 && num >= 3);

        // Queried once; every step partitions against the same count
        let workers = opts.worker_count();
        let max_chunks = workers + 1;

        let mut half = layout::two_dice_half(faces);
        half.reserve(layout::half_len(faces, num) - half.len());

        let frozen = observer.freeze();
        let total_steps = progress::total_steps(num);
        for dice in 3..=num {
            let step = StepLayout::for_step(faces, dice);
            // A few mirrored assignments only, not worth a fork
            step.extend(&mut half);

            scan::parallel_difference_pass(&mut half, faces as usize);
            let partition = ScanPartition::new(half.len(), max_chunks, opts.scan_chunk_factor);
            scan::parallel_prefix_sum(&mut half, &partition);

            let current = u64::from(dice - 2);
            #[allow(clippy::cast_precision_loss)]
            let progress = current as f64 / total_steps as f64;
            if frozen.should_report(progress) {
                frozen.update(progress);
                observer.on_progress(&ProgressUpdate::new(
                    calc_index,
                    "ParallelScan",
                    progress,
                    current,
                    total_steps,
                ));
            }
        }

        observer.on_progress(&ProgressUpdate::done(calc_index, "ParallelScan"));
        Ok(Distribution::from_half(faces, num, half))
    }

    fn name(&self) -> &'static str {
        "ParallelScan"
    }
}
