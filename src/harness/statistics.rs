// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the self-test runner, one slot per [`Counters`] variant.

use serde::Serialize;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro};

#[derive(EnumCountMacro, Display, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Strategy returned the expected answer.
    Passed,
    /// Strategy returned something else.
    Failed,
    /// Strategy returned no pair (expected or not).
    NoSolution,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total number of cases run.
    pub fn cases(&self) -> u64 {
        self.get(Counters::Passed) + self.get(Counters::Failed)
    }
}
