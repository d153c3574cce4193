// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Micro-benchmark runner.
//!
//! Times each strategy on one synthetic input and reports how much slower
//! each is than the fastest. This is a quick sanity check of the complexity
//! claims, not a statistically careful benchmark; use the criterion benches
//! for that.

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::exercises::Variant;
use crate::pair::IndexPair;
use crate::two_sum::{PairFinder, Strategy};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::hint::black_box;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Smallest input that can hold a pair.
pub const MIN_BENCH_SIZE: usize = 2;

/// Largest input whose target `2n - 3` fits in an `i64`.
pub const MAX_BENCH_SIZE: usize = (i64::MAX as usize - 1) / 2 + 2;

/// Shape of the synthetic input.
///
/// Both workloads hold the values `0..n` and use target `2n - 3`, whose
/// only solution is the two largest values. With `Ascending` those sit at
/// the very end, which is the worst case for the brute-force scan.
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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    #[default]
    Ascending,
    Shuffled,
}

impl Workload {
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| Error::UnknownWorkload {
            name: name.to_string(),
            expected: Workload::iter()
                .map(|workload| workload.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Build the input sequence and target for `size` values.
    pub fn generate(self, size: usize, seed: u64) -> Result<(Vec<i64>, i64)> {
        if size < MIN_BENCH_SIZE {
            return Err(Error::BenchSizeTooSmall {
                size,
                min: MIN_BENCH_SIZE,
            });
        }
        let too_large = Error::BenchSizeTooLarge {
            size,
            max: MAX_BENCH_SIZE,
        };
        let n = i64::try_from(size).map_err(|_| too_large.clone())?;
        let target = (n - 3).checked_add(n).ok_or(too_large)?;

        let mut nums: Vec<i64> = (0..n).collect();
        if self == Workload::Shuffled {
            let mut rng = StdRng::seed_from_u64(seed);
            nums.shuffle(&mut rng);
        }
        Ok((nums, target))
    }
}

/// Best time of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub strategy: Strategy,
    pub elapsed_secs: f64,
    pub pair: Option<IndexPair>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub size: usize,
    pub workload: Workload,
    pub target: i64,
    pub timings: Vec<Timing>,
}

impl BenchReport {
    pub fn timing(&self, strategy: Strategy) -> Option<&Timing> {
        self.timings.iter().find(|timing| timing.strategy == strategy)
    }

    pub fn fastest(&self) -> Option<&Timing> {
        self.timings
            .iter()
            .min_by(|a, b| a.elapsed_secs.total_cmp(&b.elapsed_secs))
    }

    /// How many times slower `slow` was than `fast`.
    ///
    /// `None` if either strategy was not run. A zero-length fast time is
    /// clamped to one nanosecond so the ratio stays finite.
    pub fn speedup(&self, fast: Strategy, slow: Strategy) -> Option<f64> {
        let fast = self.timing(fast)?.elapsed_secs.max(1e-9);
        let slow = self.timing(slow)?.elapsed_secs;
        Some(slow / fast)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(50);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Performance Comparison:");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(
            out,
            "n = {}, workload = {}, target = {}\n",
            self.size, self.workload, self.target
        );
        for timing in &self.timings {
            let _ = writeln!(
                out,
                "{:<12} {:.6} seconds",
                format!("{}:", timing.strategy),
                timing.elapsed_secs
            );
        }
        if let Some(fastest) = self.fastest() {
            for timing in &self.timings {
                if timing.strategy == fastest.strategy {
                    continue;
                }
                if let Some(ratio) = self.speedup(fastest.strategy, timing.strategy) {
                    let _ = writeln!(
                        out,
                        "Speedup: {} is {:.2}x faster than {}",
                        fastest.strategy, ratio, timing.strategy
                    );
                }
            }
        }
        out
    }
}

/// Times strategies on a generated workload.
#[derive(Debug, Clone)]
pub struct Benchmark {
    pub size: usize,
    pub seed: u64,
    pub workload: Workload,
    pub repetitions: usize,
    pub strategies: Vec<Strategy>,
}

impl Benchmark {
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self {
            size: config.bench_size,
            seed: config.seed,
            workload: config.workload,
            repetitions: config.repetitions,
            strategies: config.strategies.clone(),
        }
    }

    pub fn run(&self) -> Result<BenchReport> {
        let (nums, target) = self.workload.generate(self.size, self.seed)?;
        info!(
            "benchmark: n={} workload={} target={} repetitions={}",
            self.size, self.workload, target, self.repetitions
        );

        let timings = self
            .strategies
            .iter()
            .map(|&strategy| self.time(strategy, &nums, target))
            .collect();

        Ok(BenchReport {
            size: self.size,
            workload: self.workload,
            target,
            timings,
        })
    }

    fn time(&self, strategy: Strategy, nums: &[i64], target: i64) -> Timing {
        let (best, pair) = best_of(self.repetitions, || {
            strategy.find_pair(black_box(nums), black_box(target))
        });
        debug!("benchmark: {} best {:?}, result {:?}", strategy, best, pair);
        Timing {
            strategy,
            elapsed_secs: best.as_secs_f64(),
            pair,
        }
    }
}

/// Run `f` `repetitions` times (at least once), keeping the shortest time
/// and the last result.
fn best_of<T>(repetitions: usize, mut f: impl FnMut() -> T) -> (Duration, T) {
    let mut best = Duration::MAX;
    let mut result = None;
    for _ in 0..repetitions.max(1) {
        let start = Instant::now();
        let value = black_box(f());
        best = best.min(start.elapsed());
        result = Some(value);
    }
    match result {
        Some(value) => (best, value),
        None => unreachable!("at least one repetition runs"),
    }
}

/// The 3000-word prefix input: each of "flower", "flow" and "flight"
/// repeated `copies` times.
pub fn prefix_workload(copies: usize) -> Vec<String> {
    ["flower", "flow", "flight"]
        .iter()
        .flat_map(|word| std::iter::repeat(word.to_string()).take(copies))
        .collect()
}

/// Best time of one longest-common-prefix variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantTiming {
    pub variant: Variant,
    pub elapsed_secs: f64,
    pub prefix: String,
}

/// Time every longest-common-prefix variant on `words`.
pub fn time_prefix_variants<S: AsRef<str>>(words: &[S], repetitions: usize) -> Vec<VariantTiming> {
    Variant::all()
        .map(|variant| {
            let (best, prefix) =
                best_of(repetitions, || variant.longest_common_prefix(black_box(words)));
            debug!("prefix benchmark: {} best {:?}", variant, best);
            VariantTiming {
                variant,
                elapsed_secs: best.as_secs_f64(),
                prefix,
            }
        })
        .collect()
}

/// Text report for [`time_prefix_variants`], with the brute-force slowdown.
pub fn render_variant_timings(timings: &[VariantTiming]) -> String {
    let mut out = String::new();
    for timing in timings {
        let _ = writeln!(
            out,
            "{:<12} {:.6} seconds (prefix {:?})",
            format!("{}:", timing.variant),
            timing.elapsed_secs,
            timing.prefix
        );
    }
    let secs = |variant| {
        timings
            .iter()
            .find(|timing| timing.variant == variant)
            .map(|timing| timing.elapsed_secs)
    };
    if let (Some(optimal), Some(brute)) = (secs(Variant::Optimal), secs(Variant::BruteForce)) {
        let _ = writeln!(out, "Speedup: {:.2}x faster", brute / optimal.max(1e-9));
    }
    out
}
