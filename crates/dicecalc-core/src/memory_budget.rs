//! Memory budget estimation and validation.

use crate::layout;

/// Rough per-entry bookkeeping cost of a heap-allocated `BigInt`
/// (sign + digit vector header), independent of its magnitude.
const BIGINT_OVERHEAD_BYTES: usize = 32;

/// Memory estimate for a distribution computation.
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// Estimated memory for the half-array itself (in bytes).
    pub array_bytes: usize,
    /// Estimated memory for temporaries (in bytes).
    pub temp_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for the distribution of `num` dice with
    /// `faces` faces, computed with `workers` workers.
    ///
    /// Counts are bounded by `faces^num`, so each entry needs at most
    /// `num * log2(faces)` bits; the half-array has `ceil(N/2)` entries
    /// and the scan keeps one chunk total per worker.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn estimate(faces: u32, num: u32, workers: usize) -> Self {
        let entry_bits = (f64::from(num) * f64::from(faces.max(2)).log2()).ceil() as usize;
        let entry_bytes = entry_bits.div_ceil(8) + BIGINT_OVERHEAD_BYTES;

        let entries = if faces >= 1 && num >= 1 {
            layout::half_len(faces, num)
        } else {
            0
        };
        let array_bytes = entries.saturating_mul(entry_bytes);

        // The ends array plus per-chunk reduction results
        let temp_bytes = (workers + 1).saturating_mul(2 * entry_bytes);

        Self {
            array_bytes,
            temp_bytes,
            total_bytes: array_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string parses to 0, meaning unlimited.
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot
/// be parsed.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit: {e}"))?;
    Ok(value * multiplier)
}
