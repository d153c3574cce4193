// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use pair_sum::IndexPair;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A random input: up to `max_len` values in `-spread..=spread`, and a
/// target in twice that range.
pub fn random_case(rng: &mut StdRng, max_len: usize, spread: i64) -> (Vec<i64>, i64) {
    let len = rng.random_range(0..=max_len);
    let nums = (0..len).map(|_| rng.random_range(-spread..=spread)).collect();
    let target = rng.random_range(-2 * spread..=2 * spread);
    (nums, target)
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every valid pair, in row-major order.
#[allow(dead_code)]
pub fn all_solutions(nums: &[i64], target: i64) -> Vec<IndexPair> {
    let mut pairs = Vec::new();
    for i in 0..nums.len() {
        for j in (i + 1)..nums.len() {
            if nums[i] + nums[j] == target {
                pairs.push(IndexPair::new(i, j));
            }
        }
    }
    pairs
}
