// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force strategy: test every pair.
//!
//! Pairs are visited in row-major order (`i` ascending, then `j > i`
//! ascending) and the first match is returned. Time O(n²), space O(1).
//! This is the correctness baseline and the slow side of the timing
//! comparison, not something to call on large inputs.

use crate::pair::{sums_to, IndexPair};
use log::debug;

/// Find the first pair `(i, j)`, `i < j`, in row-major order.
pub fn find_pair(nums: &[i64], target: i64) -> Option<IndexPair> {
    debug!("brute-force: {} values, target {}", nums.len(), target);
    let n = nums.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if sums_to(nums[i], nums[j], target) {
                return Some(IndexPair::new(i, j));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some(IndexPair::new(0, 1)));
        assert_eq!(find_pair(&[2, 7, 11, 15], 26), Some(IndexPair::new(2, 3)));
    }

    #[test]
    fn test_row_major_order() {
        // (0, 3) and (1, 2) both sum to 5; row-major finds (0, 3) first.
        assert_eq!(find_pair(&[1, 2, 3, 4], 5), Some(IndexPair::new(0, 3)));
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(find_pair(&[1, 2, 3], 100), None);
        assert_eq!(find_pair(&[4], 8), None);
        assert_eq!(find_pair(&[], 0), None);
    }

    #[test]
    fn test_no_overflow() {
        assert_eq!(find_pair(&[i64::MAX, i64::MAX], -2), None);
        assert_eq!(find_pair(&[i64::MAX, i64::MIN], -1), Some(IndexPair::new(0, 1)));
    }
}
