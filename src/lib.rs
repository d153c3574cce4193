// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two Sum and its sibling array exercises.
//!
//! Given a sequence of integers and a target, find two distinct indices whose
//! values add up to the target. The answer is an [`IndexPair`] in ascending
//! order, or `None` when no pair exists (including sequences shorter than
//! two elements).
//!
//! # Strategies
//!
//! | Strategy      | Time       | Extra space |
//! |---------------|------------|-------------|
//! | hash-index    | O(n)       | O(n)        |
//! | brute-force   | O(n²)      | O(1)        |
//! | two-pointer   | O(n log n) | O(n)        |
//!
//! All three are pure functions over `&[i64]`; see [`two_sum`] for how they
//! can differ when several pairs qualify.
//!
//! # Harnesses
//!
//! [`harness::SelfTest`] runs the known scenarios through chosen strategies
//! and reports pass/fail. [`harness::Benchmark`] times the strategies on a
//! synthetic input to show the quadratic/linear gap. Both are driven from
//! the `pairsum` binary and configured by [`config::HarnessConfig`].
//!
//! # Other exercises
//!
//! [`exercises`] holds Contains Duplicate and Longest Common Prefix, each
//! with an optimal and a brute-force variant.

pub mod config;
pub mod error;
pub mod exercises;
pub mod harness;
pub mod options;
pub mod pair;
pub mod run;
pub mod two_sum;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pair::IndexPair;
pub use two_sum::{PairFinder, Strategy};
