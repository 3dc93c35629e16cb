//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigInt;

use dicecalc_core::Distribution;

/// Format a `BigInt` count for display, potentially truncating.
#[must_use]
pub fn format_count(value: &BigInt, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a roll as conventional dice notation, e.g. `3d6`.
#[must_use]
pub fn format_roll(faces: u32, num: u32) -> String {
    format!("{num}d{faces}")
}

/// Write the full distribution to a file, one `sum count` pair per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_distribution(path: &str, dist: &Distribution) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for (sum, count) in dist.sums().zip(dist.counts()) {
        writeln!(file, "{sum} {count}")?;
    }
    file.flush()
}
