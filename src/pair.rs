// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result type for the pair-sum strategies.
//!
//! A solution is an unordered pair of two distinct indices. We always store
//! it in ascending order so that results from different strategies can be
//! compared directly.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Two distinct indices into the input sequence, `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IndexPair {
    low: usize,
    high: usize,
}

impl IndexPair {
    /// Create a pair from two indices in either order.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn new(a: usize, b: usize) -> Self {
        assert!(a != b, "Index pair needs distinct indices: {}", a);
        Self::ordered(a, b)
    }

    /// Try to create a pair, returning an error if the indices are equal.
    pub fn try_new(a: usize, b: usize) -> Result<Self> {
        if a == b {
            Err(Error::SameIndex { index: a })
        } else {
            Ok(Self::ordered(a, b))
        }
    }

    fn ordered(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// The smaller index.
    pub fn low(self) -> usize {
        self.low
    }

    /// The larger index.
    pub fn high(self) -> usize {
        self.high
    }

    /// The pair as `[low, high]`.
    pub fn as_array(self) -> [usize; 2] {
        [self.low, self.high]
    }

    /// Check that this pair is a solution for `nums` and `target`.
    ///
    /// Returns false (rather than panicking) when an index is out of range.
    pub fn is_solution(self, nums: &[i64], target: i64) -> bool {
        match (nums.get(self.low), nums.get(self.high)) {
            (Some(&a), Some(&b)) => sums_to(a, b, target),
            _ => false,
        }
    }
}

/// Overflow-free test of `a + b == target`.
pub(crate) fn sums_to(a: i64, b: i64, target: i64) -> bool {
    a as i128 + b as i128 == target as i128
}

impl fmt::Display for IndexPair {
    /// Format as "[low, high]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl From<IndexPair> for [usize; 2] {
    fn from(pair: IndexPair) -> Self {
        pair.as_array()
    }
}
