//! Calculation options and configuration.

use crate::constants::SMALL_SCAN_FACTOR;

/// Options for distribution calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Worker count for the parallel engine (0 = host available parallelism).
    ///
    /// The chunk partition is derived from this value, so forcing a fixed
    /// count makes the partition deterministic across hosts.
    pub workers: usize,
    /// Small-array multiplier for the chunked scan (0 = default).
    pub scan_chunk_factor: usize,
    /// Whether to show verbose output.
    pub verbose: bool,
    /// Whether to show detailed output.
    pub details: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            workers: 0,
            scan_chunk_factor: SMALL_SCAN_FACTOR,
            verbose: false,
            details: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.scan_chunk_factor == 0 {
            self.scan_chunk_factor = SMALL_SCAN_FACTOR;
        }
        self
    }

    /// Resolve the effective worker count.
    ///
    /// `workers == 0` queries the host once; the result is reused for the
    /// whole calculation so every step sees the same partition basis.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
        } else {
            self.workers
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.workers, 0);
        assert_eq!(opts.scan_chunk_factor, SMALL_SCAN_FACTOR);
        assert!(!opts.verbose);
        assert!(!opts.details);
    }

    #[test]
    fn normalize_zero_factor() {
        let opts = Options {
            scan_chunk_factor: 0,
            ..Default::default()
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.scan_chunk_factor, SMALL_SCAN_FACTOR);
    }

    #[test]
    fn worker_count_explicit() {
        let opts = Options {
            workers: 4,
            ..Default::default()
        };
        assert_eq!(opts.worker_count(), 4);
    }

    #[test]
    fn worker_count_auto_is_positive() {
        let opts = Options::default();
        assert!(opts.worker_count() >= 1);
    }
}
