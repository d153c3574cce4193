// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contains Duplicate: does any value appear at least twice?

use log::debug;
use std::collections::{HashMap, HashSet};

/// Count every value, then report whether any count exceeds one.
///
/// Always walks the whole sequence twice. O(n) time, O(n) space.
pub fn contains_duplicate_counting(nums: &[i64]) -> bool {
    let mut counts: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for &value in nums {
        *counts.entry(value).or_insert(0) += 1;
    }
    let found = nums.iter().any(|value| counts[value] > 1);
    debug!("contains-duplicate (counting): {} values, found={}", nums.len(), found);
    found
}

/// Stop at the first value already seen. O(n) time, O(n) space.
pub fn contains_duplicate(nums: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(nums.len());
    // insert returns false when the value was already present
    !nums.iter().all(|&value| seen.insert(value))
}

/// Compare every pair. O(n²) time, O(1) space.
pub fn contains_duplicate_brute_force(nums: &[i64]) -> bool {
    nums.iter()
        .enumerate()
        .any(|(i, a)| nums[i + 1..].contains(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&[i64], bool)] = &[
        (&[1, 2, 3, 1], true),
        (&[1, 2, 3, 4], false),
        (&[1, 1, 1, 3, 3, 4, 3, 2, 4, 2], true),
        (&[], false),
        (&[7], false),
        (&[i64::MIN, i64::MAX, i64::MIN], true),
    ];

    #[test]
    fn test_all_variants_agree() {
        for &(nums, expected) in CASES {
            assert_eq!(contains_duplicate(nums), expected, "{:?}", nums);
            assert_eq!(contains_duplicate_counting(nums), expected, "{:?}", nums);
            assert_eq!(contains_duplicate_brute_force(nums), expected, "{:?}", nums);
        }
    }
}
