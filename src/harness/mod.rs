// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Self-test and timing harnesses.

pub mod benchmark;
pub mod scenarios;
pub mod selftest;
pub mod statistics;

pub use benchmark::{
    prefix_workload, render_variant_timings, time_prefix_variants, BenchReport, Benchmark, Timing,
    VariantTiming, Workload,
};
pub use scenarios::{Scenario, NO_SOLUTION_SCENARIOS, SCENARIOS};
pub use selftest::{CaseOutcome, SelfTest, SelfTestReport};
pub use statistics::{Counters, Statistics};
