// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hash-index strategy.
//!
//! One pass left to right. For each position `i` we look for the complement
//! `target - nums[i]` among the values already seen; if it is there we are
//! done, otherwise `nums[i]` is recorded with its index.
//!
//! Only the first index of each value is recorded, so when several pairs
//! qualify the one found is the one whose larger index is smallest, paired
//! with the earliest occurrence of its complement.
//!
//! Time O(n), auxiliary space O(n).

use crate::pair::IndexPair;
use log::{debug, trace};
use std::collections::HashMap;

/// Find a pair using a value → first-seen-index map.
///
/// # Example
///
/// ```
/// use pair_sum::two_sum::hash_index::find_pair;
/// use pair_sum::IndexPair;
///
/// assert_eq!(find_pair(&[3, 3], 6), Some(IndexPair::new(0, 1)));
/// assert_eq!(find_pair(&[1, 2], 7), None);
/// ```
pub fn find_pair(nums: &[i64], target: i64) -> Option<IndexPair> {
    debug!("hash-index: {} values, target {}", nums.len(), target);
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        // A complement outside the i64 range cannot be in the sequence.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = seen.get(&complement) {
                trace!("hash-index: nums[{}] + nums[{}] = {}", j, i, target);
                return Some(IndexPair::new(j, i));
            }
        }
        seen.entry(value).or_insert(i);
    }

    trace!("hash-index: no pair after {} values", nums.len());
    None
}
