//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::{FrozenObserver, ProgressObserver};
use crate::progress::ProgressUpdate;

/// Observer that sends updates through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<ProgressUpdate>,
    last_reported: AtomicU64,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self {
            sender,
            last_reported: AtomicU64::new(0),
        }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if update.done || (update.progress - last) >= PROGRESS_REPORT_THRESHOLD {
            // Non-blocking send; a full channel drops the update
            let _ = self.sender.try_send(update.clone());
            self.last_reported
                .store(update.progress.to_bits(), Ordering::Relaxed);
        }
    }

    fn freeze(&self) -> FrozenObserver {
        FrozenObserver::new(PROGRESS_REPORT_THRESHOLD)
    }
}

/// Observer that logs progress updates with temporal throttling.
pub struct LoggingObserver {
    last_reported: AtomicU64,
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            last_reported: AtomicU64::new(0),
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_progress(&self, update: &ProgressUpdate) {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        let last_time = self.last_time.load(Ordering::Relaxed);
        if now - last_time < self.min_interval_ms && !update.done {
            return;
        }

        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if update.done || (update.progress - last) >= PROGRESS_REPORT_THRESHOLD {
            if update.done {
                info!(
                    algorithm = %update.algorithm,
                    "Calculation complete"
                );
            } else {
                debug!(
                    algorithm = %update.algorithm,
                    progress = format!("{:.1}%", update.progress * 100.0),
                    step = update.current_step,
                    total = update.total_steps,
                    "Convolution step"
                );
            }
            self.last_reported
                .store(update.progress.to_bits(), Ordering::Relaxed);
            self.last_time.store(now, Ordering::Relaxed);
        }
    }

    fn freeze(&self) -> FrozenObserver {
        FrozenObserver::new(PROGRESS_REPORT_THRESHOLD)
    }
}

/// Null object pattern — does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {
        // Intentionally empty
    }

    fn freeze(&self) -> FrozenObserver {
        FrozenObserver::new(1.0) // Never reports
    }
}
