// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sibling array exercises that sit next to Two Sum.
//!
//! Each comes with an optimal and a brute-force variant:
//! - Contains Duplicate
//! - Longest Common Prefix

pub mod common_prefix;
pub mod contains_duplicate;

pub use common_prefix::{longest_common_prefix, longest_common_prefix_vertical};
pub use contains_duplicate::{
    contains_duplicate, contains_duplicate_brute_force, contains_duplicate_counting,
};

use crate::error::{Error, Result};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Which implementation of an exercise to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Set lookup for duplicates, horizontal shrink for prefixes.
    #[default]
    Optimal,
    /// Pairwise comparison for duplicates, column scan for prefixes.
    BruteForce,
}

impl Variant {
    pub fn all() -> impl Iterator<Item = Variant> {
        Variant::iter()
    }

    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| Error::UnknownVariant {
            name: name.to_string(),
            expected: Self::names().join(", "),
        })
    }

    pub fn names() -> Vec<&'static str> {
        Variant::iter().map(Into::into).collect()
    }

    pub fn contains_duplicate(self, nums: &[i64]) -> bool {
        match self {
            Variant::Optimal => contains_duplicate(nums),
            Variant::BruteForce => contains_duplicate_brute_force(nums),
        }
    }

    pub fn longest_common_prefix<S: AsRef<str>>(self, words: &[S]) -> String {
        match self {
            Variant::Optimal => longest_common_prefix(words),
            Variant::BruteForce => longest_common_prefix_vertical(words),
        }
    }
}
