//! Windowed-sum passes, serial and parallel.
//!
//! Convolving a count array with one uniform die is a sliding-window sum of
//! width `faces`. Both engines compute it in two linear passes: a
//! *difference* pass (`vec[j] -= vec[j - faces]`, descending) followed by an
//! inclusive *prefix-sum* pass. The parallel variants here reproduce the
//! serial results bit-for-bit:
//!
//! - the difference pass splits the indices into `faces` residue classes,
//!   which never read or write across class boundaries;
//! - the prefix sum is a chunked scan: local scan / reduce per chunk
//!   (phase A), a serial combine of chunk totals (phase B), then local
//!   scans over the remaining chunks (phase C). Each rayon call returns
//!   only when all its tasks are done, which is exactly the full barrier
//!   the phase order requires.
//!
//! The partition is derived from the *configured* worker count, never from
//! live scheduling, so output is identical for any actual thread count.

use num_bigint::BigInt;
use num_traits::Zero;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Immutable chunk partition for one scan, computed once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPartition {
    length: usize,
    chunks: usize,
}

impl ScanPartition {
    /// Partition `length` elements into at most `max_chunks` chunks.
    ///
    /// Short arrays collapse to two chunks (per-chunk coordination would
    /// dominate), and degenerate ones to at most one chunk per element.
    /// `max_chunks` is normally `workers + 1`: both scan passes leave one
    /// chunk out, so the extra chunk keeps the workers evenly loaded.
    #[must_use]
    pub fn new(length: usize, max_chunks: usize, small_factor: usize) -> Self {
        debug_assert!(length >= 1);
        debug_assert!(max_chunks >= 2);
        let mut chunks = if length < small_factor * max_chunks {
            2
        } else {
            max_chunks
        };
        if chunks > length {
            chunks = length;
        }
        Self { length, chunks }
    }

    /// Number of elements covered by this partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the partition covers no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of chunks.
    #[must_use]
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Start index of chunk `c`; `boundary(chunks)` is the array length.
    #[must_use]
    pub fn boundary(&self, c: usize) -> usize {
        debug_assert!(c <= self.chunks);
        c * self.length / self.chunks
    }
}

/// Serial difference pass: `vec[j] -= vec[j - faces]`, descending so the
/// smaller index still holds its old value when read.
pub(crate) fn difference_pass(vec: &mut [BigInt], faces: usize) {
    for j in (faces..vec.len()).rev() {
        let (lower, upper) = vec.split_at_mut(j);
        upper[0] -= &lower[j - faces];
    }
}

/// Serial inclusive prefix sum over a slice.
pub(crate) fn inclusive_scan(chunk: &mut [BigInt]) {
    for i in 1..chunk.len() {
        let (lower, upper) = chunk.split_at_mut(i);
        upper[0] += &lower[i - 1];
    }
}

/// Parallel difference pass over residue classes modulo `faces`.
///
/// `j` and `j - faces` always share a residue class, so the classes are
/// fully independent; rayon hands them to workers one class at a time
/// (the per-class work is roughly uniform).
pub(crate) fn parallel_difference_pass(vec: &mut [BigInt], faces: usize) {
    debug_assert!(faces >= 1);
    if vec.len() <= faces {
        return;
    }

    let mut classes: Vec<Vec<&mut BigInt>> = (0..faces).map(|_| Vec::new()).collect();
    for (j, value) in vec.iter_mut().enumerate() {
        classes[j % faces].push(value);
    }

    classes.into_par_iter().for_each(|mut class| {
        for i in (1..class.len()).rev() {
            let (lower, upper) = class.split_at_mut(i);
            *upper[0] -= &*lower[i - 1];
        }
    });
}

/// Parallel chunked inclusive prefix sum.
///
/// Phase A scans chunk 0 in place and reduces every middle chunk to its
/// sum (the last chunk's sum is never consumed and is not computed).
/// Phase B serially accumulates the chunk totals and injects each chunk's
/// incoming offset into its first element. Phase C scans the remaining
/// chunks locally; their first elements already carry the global offset.
pub(crate) fn parallel_prefix_sum(vec: &mut [BigInt], partition: &ScanPartition) {
    debug_assert_eq!(vec.len(), partition.len());
    let chunks = partition.chunks();
    if chunks <= 1 {
        inclusive_scan(vec);
        return;
    }

    let b1 = partition.boundary(1);
    let (first, rest) = vec.split_at_mut(b1);
    let (first_total, sums) = rayon::join(
        || {
            inclusive_scan(first);
            first.last().cloned().expect("chunk 0 is non-empty")
        },
        || {
            (1..chunks - 1)
                .into_par_iter()
                .map(|c| {
                    let lo = partition.boundary(c) - b1;
                    let hi = partition.boundary(c + 1) - b1;
                    rest[lo..hi].iter().sum::<BigInt>()
                })
                .collect::<Vec<_>>()
        },
    );

    // Phase B: ends[c] becomes the total of all chunks before chunk c
    let mut ends = vec![BigInt::zero(); chunks];
    ends[1] = first_total;
    for (i, sum) in sums.into_iter().enumerate() {
        ends[i + 2] = sum;
    }
    for c in 1..chunks {
        let (done, tail) = ends.split_at_mut(c);
        tail[0] += &done[c - 1];
        vec[partition.boundary(c)] += &tail[0];
    }

    // Phase C
    let mut tail = &mut vec[b1..];
    let mut regions = Vec::with_capacity(chunks - 1);
    for c in 1..chunks {
        let len = partition.boundary(c + 1) - partition.boundary(c);
        let (region, rest) = std::mem::take(&mut tail).split_at_mut(len);
        regions.push(region);
        tail = rest;
    }
    regions.into_par_iter().for_each(inclusive_scan);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bigints(values: impl IntoIterator<Item = i64>) -> Vec<BigInt> {
        values.into_iter().map(BigInt::from).collect()
    }

    /// Direct width-`faces` windowed sum, the semantic baseline for the
    /// difference/prefix-sum pair.
    fn naive_windowed_sum(input: &[BigInt], faces: usize) -> Vec<BigInt> {
        (0..input.len())
            .map(|j| {
                let lo = (j + 1).saturating_sub(faces);
                input[lo..=j].iter().sum()
            })
            .collect()
    }

    #[test]
    fn partition_boundaries_cover_everything() {
        let partition = ScanPartition::new(1000, 5, 1);
        assert_eq!(partition.chunks(), 5);
        assert_eq!(partition.boundary(0), 0);
        assert_eq!(partition.boundary(5), 1000);
        for c in 0..partition.chunks() {
            assert!(partition.boundary(c) < partition.boundary(c + 1));
        }
    }

    #[test]
    fn partition_small_array_uses_two_chunks() {
        let partition = ScanPartition::new(50, 9, 100);
        assert_eq!(partition.chunks(), 2);
    }

    #[test]
    fn partition_never_exceeds_length() {
        let partition = ScanPartition::new(1, 9, 100);
        assert_eq!(partition.chunks(), 1);
        // A zero factor disables the small-array fallback entirely
        let partition = ScanPartition::new(3, 9, 0);
        assert_eq!(partition.chunks(), 3);
    }

    #[test]
    fn difference_then_scan_is_windowed_sum() {
        let input = bigints([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7]);
        for faces in 1..6 {
            let mut vec = input.clone();
            difference_pass(&mut vec, faces);
            inclusive_scan(&mut vec);
            assert_eq!(vec, naive_windowed_sum(&input, faces), "faces={faces}");
        }
    }

    #[test]
    fn parallel_difference_matches_serial() {
        let input = bigints((0..200).map(|i| (i * 7 + 3) % 23));
        for faces in [1, 2, 3, 6, 7, 50, 199, 200, 300] {
            let mut serial = input.clone();
            difference_pass(&mut serial, faces);
            let mut parallel = input.clone();
            parallel_difference_pass(&mut parallel, faces);
            assert_eq!(serial, parallel, "faces={faces}");
        }
    }

    #[test]
    fn parallel_scan_matches_serial() {
        let input = bigints((0..500).map(|i| (i * 31 + 17) % 101));
        for max_chunks in [2, 3, 5, 9, 17] {
            for small_factor in [1, 100] {
                let mut serial = input.clone();
                inclusive_scan(&mut serial);
                let mut parallel = input.clone();
                let partition = ScanPartition::new(parallel.len(), max_chunks, small_factor);
                parallel_prefix_sum(&mut parallel, &partition);
                assert_eq!(
                    serial, parallel,
                    "max_chunks={max_chunks} small_factor={small_factor}"
                );
            }
        }
    }

    #[test]
    fn parallel_scan_single_element() {
        let mut vec = bigints([42]);
        let partition = ScanPartition::new(1, 5, 100);
        parallel_prefix_sum(&mut vec, &partition);
        assert_eq!(vec, bigints([42]));
    }

    #[test]
    fn parallel_scan_two_elements() {
        let mut vec = bigints([1, 2]);
        let partition = ScanPartition::new(2, 5, 100);
        parallel_prefix_sum(&mut vec, &partition);
        assert_eq!(vec, bigints([1, 3]));
    }

    #[test]
    fn scan_handles_negative_intermediates() {
        // The difference pass can park negative values before the scan
        // re-accumulates them
        let input = bigints([5, -3, 2, -7, 0, 4]);
        let mut serial = input.clone();
        inclusive_scan(&mut serial);
        let mut parallel = input;
        let partition = ScanPartition::new(parallel.len(), 3, 1);
        parallel_prefix_sum(&mut parallel, &partition);
        assert_eq!(serial, parallel);
    }
}
