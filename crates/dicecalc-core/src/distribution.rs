//! The exact dice-sum distribution type.
//!
//! Stores only the first half of the palindromic count array; the second
//! half is derived by mirroring on access. Counts are exact `BigInt`s, so
//! nothing here overflows or rounds.

use std::ops::RangeInclusive;

use num_bigint::BigInt;
use num_traits::One;

use crate::layout;

/// Exact distribution of sums for `num` dice with `faces` faces each.
///
/// Achievable sums range over `num..=faces*num`; `count(s)` is the number
/// of ordered outcomes with total `s`. The symmetry invariant
/// `count(s) == count(num*(faces+1) - s)` lets the type store only
/// `ceil(N/2)` of the `N = num*(faces-1)+1` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    faces: u32,
    num: u32,
    half: Vec<BigInt>,
}

impl Distribution {
    /// Wrap a computed half-array.
    pub(crate) fn from_half(faces: u32, num: u32, half: Vec<BigInt>) -> Self {
        debug_assert_eq!(half.len(), layout::half_len(faces, num));
        Self { faces, num, half }
    }

    /// Closed-form distribution for one or two dice.
    ///
    /// One die is uniform; two dice are the triangle `1..=faces`, which is
    /// also the seed state every convolution run starts from.
    pub(crate) fn baseline(faces: u32, num: u32) -> Self {
        debug_assert!((1..=2).contains(&num));
        let half = if num == 1 {
            vec![BigInt::one(); layout::half_len(faces, 1)]
        } else {
            layout::two_dice_half(faces)
        };
        Self::from_half(faces, num, half)
    }

    /// Faces per die.
    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Number of dice.
    #[must_use]
    pub fn num(&self) -> u32 {
        self.num
    }

    /// Number of distinct achievable sums.
    #[must_use]
    pub fn num_sums(&self) -> usize {
        layout::num_sums(self.faces, self.num)
    }

    /// The range of achievable sums.
    #[must_use]
    pub fn sums(&self) -> RangeInclusive<u64> {
        u64::from(self.num)..=u64::from(self.num) * u64::from(self.faces)
    }

    /// The stored (first) half of the count array.
    #[must_use]
    pub fn half_counts(&self) -> &[BigInt] {
        &self.half
    }

    /// Count of ordered outcomes with total `sum`, or `None` if the sum is
    /// not achievable.
    #[must_use]
    pub fn count(&self, sum: u64) -> Option<&BigInt> {
        if !self.sums().contains(&sum) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let mut offset = (sum - u64::from(self.num)) as usize;
        if offset >= self.half.len() {
            offset = self.num_sums() - 1 - offset;
        }
        Some(&self.half[offset])
    }

    /// The largest entry of the distribution.
    #[must_use]
    pub fn max_count(&self) -> &BigInt {
        // The distribution is unimodal; the peak sits at the end of the
        // stored half. Scanning keeps this independent of that fact.
        self.half.iter().max().expect("distribution is never empty")
    }

    /// A sum at which the maximum count occurs (the lower one when the peak
    /// is a mirrored pair).
    #[must_use]
    pub fn peak_sum(&self) -> u64 {
        u64::from(self.num) * (u64::from(self.faces) + 1) / 2
    }

    /// Total number of ordered outcomes: the sum of all entries.
    ///
    /// Equals `faces^num` exactly (mass conservation).
    #[must_use]
    pub fn total(&self) -> BigInt {
        let mut total: BigInt = self.half.iter().sum();
        total *= 2;
        if self.num_sums() % 2 == 1 {
            // Odd sum count: the center entry was doubled once too often
            total -= self.half.last().expect("distribution is never empty");
        }
        total
    }

    /// Materialize the full count array, mirrored half included.
    #[must_use]
    pub fn counts(&self) -> Vec<BigInt> {
        let n = self.num_sums();
        let mut full = Vec::with_capacity(n);
        full.extend(self.half.iter().cloned());
        for offset in self.half.len()..n {
            full.push(self.half[n - 1 - offset].clone());
        }
        full
    }

    /// Check the symmetry invariant over every achievable sum.
    ///
    /// Trivially true for the mirrored half; exposed for tests and debug
    /// assertions on independently constructed arrays.
    #[must_use]
    pub fn is_symmetric(counts: &[BigInt]) -> bool {
        let n = counts.len();
        (0..n / 2).all(|i| counts[i] == counts[n - 1 - i])
    }
}
