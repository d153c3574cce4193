// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sort-and-scan (two-pointer) strategy.
//!
//! Each value is paired with its original index and the pairs are sorted by
//! value. `sort_by_key` is stable, so equal values keep their original
//! relative order. Two pointers then walk in from both ends:
//!
//! - sum equal to the target: report the original indices, ascending
//! - sum below the target: advance the low pointer
//! - sum above the target: retreat the high pointer
//!
//! The scan stops with no result when the pointers meet.
//!
//! Time O(n log n), dominated by the sort. Auxiliary space O(n) for the
//! indexed copy; the caller's slice is never reordered.

use crate::pair::IndexPair;
use log::{debug, trace};
use std::cmp::Ordering;

/// A value together with its position in the original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Indexed {
    value: i64,
    index: usize,
}

/// Find a pair by sorting a copy and scanning from both ends.
///
/// # Example
///
/// ```
/// use pair_sum::two_sum::two_pointer::find_pair;
/// use pair_sum::IndexPair;
///
/// assert_eq!(find_pair(&[0, 4, 3, 0], 0), Some(IndexPair::new(0, 3)));
/// ```
pub fn find_pair(nums: &[i64], target: i64) -> Option<IndexPair> {
    debug!("two-pointer: {} values, target {}", nums.len(), target);
    if nums.len() < 2 {
        return None;
    }

    let mut indexed: Vec<Indexed> = nums
        .iter()
        .enumerate()
        .map(|(index, &value)| Indexed { value, index })
        .collect();
    indexed.sort_by_key(|entry| entry.value);

    let target = target as i128;
    let (mut low, mut high) = (0, indexed.len() - 1);

    while low < high {
        let sum = indexed[low].value as i128 + indexed[high].value as i128;
        match sum.cmp(&target) {
            Ordering::Equal => {
                trace!("two-pointer: match at sorted positions {} and {}", low, high);
                return Some(IndexPair::new(indexed[low].index, indexed[high].index));
            }
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
        }
    }

    None
}
