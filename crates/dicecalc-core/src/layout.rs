//! Half-array step geometry.
//!
//! A distribution over `k` dice has `N = k*(faces-1) + 1` distinct sums and
//! is palindromic, so only the first `ceil(N/2)` entries are stored. Growing
//! the array from `k-1` to `k` dice appends entries that are mirrors of
//! already-known positions: slot `j` copies from `N_prev - 1 - j`. All
//! quantities here are input-derived closed forms, never data-derived.

use num_bigint::BigInt;

/// Number of distinct sums for `num` dice of `faces` faces.
pub(crate) fn num_sums(faces: u32, num: u32) -> usize {
    num as usize * (faces as usize - 1) + 1
}

/// Stored half-array length for `num` dice: `ceil(N/2)`.
pub(crate) fn half_len(faces: u32, num: u32) -> usize {
    num_sums(faces, num).div_ceil(2)
}

/// The two-dice half-array `[1, 2, .., faces]`, the seed every convolution
/// run starts from.
pub(crate) fn two_dice_half(faces: u32) -> Vec<BigInt> {
    (1..=faces).map(BigInt::from).collect()
}

/// Geometry of one convolution step: extending the half-array from
/// `dice - 1` to `dice` dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepLayout {
    /// Dice count after this step (>= 3).
    pub dice: u32,
    /// Half-array length before the step.
    pub old_half: usize,
    /// Half-array length after the step.
    pub new_half: usize,
    /// Distinct sums before the step (`N_prev`).
    prev_sums: usize,
}

impl StepLayout {
    /// Layout for the step that produces the distribution for `dice` dice.
    pub fn for_step(faces: u32, dice: u32) -> Self {
        debug_assert!(faces >= 1);
        debug_assert!(dice >= 3);
        Self {
            dice,
            old_half: half_len(faces, dice - 1),
            new_half: half_len(faces, dice),
            prev_sums: num_sums(faces, dice - 1),
        }
    }

    /// Number of entries the extension materializes.
    pub fn added(&self) -> usize {
        self.new_half - self.old_half
    }

    /// Mirror source for new slot `j` (`old_half <= j < new_half`).
    pub fn mirror_source(&self, j: usize) -> usize {
        debug_assert!((self.old_half..self.new_half).contains(&j));
        let source = self.prev_sums - 1 - j;
        debug_assert!(source < self.old_half);
        source
    }

    /// Extend `half` to the new length by copying mirrored values.
    ///
    /// Only a handful of slots are appended per step, so this stays serial
    /// even in the parallel engine.
    pub fn extend(&self, half: &mut Vec<BigInt>) {
        debug_assert_eq!(half.len(), self.old_half);
        for j in self.old_half..self.new_half {
            half.push(half[self.mirror_source(j)].clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_len_matches_sum_count() {
        // 2 dice of 6: sums 2..=12, 11 of them, 6 stored
        assert_eq!(num_sums(6, 2), 11);
        assert_eq!(half_len(6, 2), 6);
        // 3 dice of 6: sums 3..=18, 16 of them, 8 stored
        assert_eq!(num_sums(6, 3), 16);
        assert_eq!(half_len(6, 3), 8);
        // Coins
        assert_eq!(num_sums(2, 3), 4);
        assert_eq!(half_len(2, 3), 2);
        // Single-faced dice collapse to one sum
        assert_eq!(num_sums(1, 10), 1);
        assert_eq!(half_len(1, 10), 1);
    }

    #[test]
    fn two_dice_seed() {
        let seed = two_dice_half(6);
        assert_eq!(seed.len(), half_len(6, 2));
        assert_eq!(seed[0], BigInt::from(1));
        assert_eq!(seed[5], BigInt::from(6));
    }

    #[test]
    fn step_layout_d6() {
        let step3 = StepLayout::for_step(6, 3);
        assert_eq!(step3.old_half, 6);
        assert_eq!(step3.new_half, 8);
        assert_eq!(step3.added(), 2);
        assert_eq!(step3.mirror_source(6), 4);
        assert_eq!(step3.mirror_source(7), 3);

        let step4 = StepLayout::for_step(6, 4);
        assert_eq!(step4.old_half, 8);
        assert_eq!(step4.new_half, 11);
        assert_eq!(step4.added(), 3);
        assert_eq!(step4.mirror_source(8), 7);
        assert_eq!(step4.mirror_source(10), 5);
    }

    #[test]
    fn step_layout_degenerate_faces() {
        // faces == 1 never grows the array
        for dice in 3..10 {
            let step = StepLayout::for_step(1, dice);
            assert_eq!(step.added(), 0);
        }
        // coins alternate between growing by 0 and 1
        assert_eq!(StepLayout::for_step(2, 3).added(), 0);
        assert_eq!(StepLayout::for_step(2, 4).added(), 1);
        assert_eq!(StepLayout::for_step(2, 5).added(), 0);
    }

    #[test]
    fn extend_copies_mirrors() {
        // 2-dice state for d6, extended for the 3-dice step
        let mut half = two_dice_half(6);
        StepLayout::for_step(6, 3).extend(&mut half);
        let expected: Vec<BigInt> = [1, 2, 3, 4, 5, 6, 5, 4].map(BigInt::from).into();
        assert_eq!(half, expected);
    }
}
