// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two Sum: find two distinct indices whose values add up to a target.
//!
//! Three independent strategies implement the same contract:
//!
//! - [`HashIndex`]: one left-to-right scan with a value → index map. O(n).
//! - [`BruteForce`]: every pair `(i, j)` with `i < j`, row-major. O(n²).
//! - [`TwoPointer`]: stable sort of `(value, index)` then a two-pointer
//!   scan from both ends. O(n log n).
//!
//! Every strategy returns `None` when no pair exists, including for
//! sequences shorter than two elements.
//!
//! # Agreement between strategies
//!
//! When the input holds a unique solution, all three return the same
//! [`IndexPair`]. When several pairs sum to the target (duplicate values),
//! each strategy returns *a* valid pair but not necessarily the same one.
//! For `[1, 2, 3, 4]` and target 5, brute-force returns `[0, 3]` (smallest
//! first index) while hash-index returns `[1, 2]` (smallest second index).
//! Two-pointer returns the first pair met by its scan over sorted values.
//! All are correct answers to the problem as posed.
//!
//! # Example
//!
//! ```
//! use pair_sum::two_sum::{PairFinder, Strategy};
//! use pair_sum::IndexPair;
//!
//! for strategy in Strategy::all() {
//!     let pair = strategy.find_pair(&[2, 7, 11, 15], 9);
//!     assert_eq!(pair, Some(IndexPair::new(0, 1)));
//! }
//! ```

pub mod brute_force;
pub mod hash_index;
pub mod two_pointer;

use crate::error::{Error, Result};
use crate::pair::IndexPair;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A strategy that solves Two Sum.
///
/// Implementations are pure: calling `find_pair` twice with the same
/// arguments gives the same answer, and nothing outlives the call.
pub trait PairFinder: Debug {
    /// Find two distinct indices `i < j` with `nums[i] + nums[j] == target`.
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair>;

    /// Name used in reports, matching the [`Strategy`] name.
    fn name(&self) -> &str;
}

/// Hash-index strategy, see [`hash_index::find_pair`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HashIndex;

/// Brute-force strategy, see [`brute_force::find_pair`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

/// Sort-and-scan strategy, see [`two_pointer::find_pair`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointer;

impl PairFinder for HashIndex {
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair> {
        hash_index::find_pair(nums, target)
    }

    fn name(&self) -> &str {
        Strategy::HashIndex.into()
    }
}

impl PairFinder for BruteForce {
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair> {
        brute_force::find_pair(nums, target)
    }

    fn name(&self) -> &str {
        Strategy::BruteForce.into()
    }
}

impl PairFinder for TwoPointer {
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair> {
        two_pointer::find_pair(nums, target)
    }

    fn name(&self) -> &str {
        Strategy::TwoPointer.into()
    }
}

/// Selector over the three strategies.
///
/// The textual names (`hash`, `brute`, `two-pointer`) are used on the
/// command line, in configuration files and in reports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Strategy {
    #[strum(serialize = "hash")]
    #[serde(rename = "hash")]
    HashIndex,

    #[strum(serialize = "brute")]
    #[serde(rename = "brute")]
    BruteForce,

    #[strum(serialize = "two-pointer")]
    #[serde(rename = "two-pointer")]
    TwoPointer,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub fn all() -> impl Iterator<Item = Strategy> {
        Strategy::iter()
    }

    /// Parse a strategy from its textual name.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| Error::UnknownStrategy {
            name: name.to_string(),
            expected: Self::names().join(", "),
        })
    }

    /// The textual names of every strategy.
    pub fn names() -> Vec<&'static str> {
        Strategy::iter().map(Into::into).collect()
    }
}

impl PairFinder for Strategy {
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair> {
        match self {
            Strategy::HashIndex => hash_index::find_pair(nums, target),
            Strategy::BruteForce => brute_force::find_pair(nums, target),
            Strategy::TwoPointer => two_pointer::find_pair(nums, target),
        }
    }

    fn name(&self) -> &str {
        (*self).into()
    }
}
