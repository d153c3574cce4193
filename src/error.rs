// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the outer surfaces of the crate.
//!
//! The solvers themselves never fail: "no solution" is `None`. These errors
//! cover parsing user input, naming strategies and workloads, and building
//! result pairs from raw indices.

use thiserror::Error;

/// Errors raised while parsing input or configuring the harnesses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token could not be parsed as a 64-bit integer.
    #[error("'{token}' is not a valid integer")]
    InvalidNumber { token: String },

    /// Strategy name did not match any known strategy.
    #[error("unknown strategy '{name}' (expected one of: {expected})")]
    UnknownStrategy { name: String, expected: String },

    /// Exercise variant name did not match any known variant.
    #[error("unknown variant '{name}' (expected one of: {expected})")]
    UnknownVariant { name: String, expected: String },

    /// Workload name did not match any known workload.
    #[error("unknown workload '{name}' (expected one of: {expected})")]
    UnknownWorkload { name: String, expected: String },

    /// The two indices of a pair must differ.
    #[error("index pair must use two distinct indices, got ({index}, {index})")]
    SameIndex { index: usize },

    /// A benchmark needs at least two elements to contain a pair.
    #[error("benchmark size {size} is too small (minimum {min})")]
    BenchSizeTooSmall { size: usize, min: usize },

    /// The benchmark target `2n - 3` must fit in an `i64`.
    #[error("benchmark size {size} is too large (maximum {max})")]
    BenchSizeTooLarge { size: usize, max: usize },

    /// The common prefix exercise needs at least one word.
    #[error("longest common prefix needs at least one word")]
    EmptyWordList,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse whitespace-free integer tokens into a sequence.
///
/// Commas are accepted as separators inside a token, so `"2,7,11"` and
/// `["2", "7", "11"]` both give `[2, 7, 11]`.
pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>> {
    tokens
        .iter()
        .flat_map(|token| token.as_ref().split(','))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece.parse::<i64>().map_err(|_| Error::InvalidNumber {
                token: piece.to_string(),
            })
        })
        .collect()
}
