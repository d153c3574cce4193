// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Carry out a parsed [`Action`], writing its output to any sink.
//!
//! The binary passes stdout; tests pass a `Vec<u8>`.

use crate::config::HarnessConfig;
use crate::harness::{
    prefix_workload, render_variant_timings, time_prefix_variants, Benchmark, SelfTest,
    SelfTestReport,
};
use crate::options::{Action, Options};
use crate::two_sum::PairFinder;
use anyhow::Result;
use std::io::Write;

/// Copies of each word in the `prefix --compare` input when no words are given.
const PREFIX_COMPARE_COPIES: usize = 1000;

/// Run `options` against `config`. Returns `false` when a self-test case
/// failed, so the caller can exit non-zero.
pub fn run<W: Write>(options: Options, config: &HarnessConfig, out: &mut W) -> Result<bool> {
    match options.action {
        Action::Solve {
            strategy,
            target,
            nums,
        } => match strategy.find_pair(&nums, target) {
            Some(pair) => writeln!(out, "{}", pair)?,
            None => writeln!(out, "no solution")?,
        },
        Action::SelfTest { strategies, json } => {
            let strategies = if strategies.is_empty() {
                config.strategies.clone()
            } else {
                strategies
            };
            let report = SelfTest::new(strategies).run();
            return write_selftest(&report, json, out);
        }
        Action::Bench {
            size,
            workload,
            seed,
            repetitions,
            json,
        } => {
            let mut bench = Benchmark::from_config(config);
            bench.size = size.unwrap_or(bench.size);
            bench.workload = workload.unwrap_or(bench.workload);
            bench.seed = seed.unwrap_or(bench.seed);
            bench.repetitions = repetitions.unwrap_or(bench.repetitions);
            let report = bench.run()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", report.render())?;
            }
        }
        Action::Duplicates { nums, variant } => {
            writeln!(out, "{}", variant.contains_duplicate(&nums))?
        }
        Action::Prefix {
            words,
            variant,
            compare,
        } => {
            if compare {
                let words = if words.is_empty() {
                    prefix_workload(PREFIX_COMPARE_COPIES)
                } else {
                    words
                };
                writeln!(out, "Words: {}", words.len())?;
                let timings = time_prefix_variants(&words, config.repetitions);
                write!(out, "{}", render_variant_timings(&timings))?;
            } else {
                writeln!(out, "{:?}", variant.longest_common_prefix(&words))?;
            }
        }
    }
    Ok(true)
}

fn write_selftest<W: Write>(report: &SelfTestReport, json: bool, out: &mut W) -> Result<bool> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        write!(out, "{}", report.render())?;
    }
    Ok(report.all_passed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::harness::Scenario;
    use crate::two_sum::Strategy;

    fn run_args(args: &[&str], config: &HarnessConfig) -> Result<(bool, String)> {
        let options = Options::parse_from_args(args)?;
        let mut out = Vec::new();
        let ok = run(options, config, &mut out)?;
        Ok((ok, String::from_utf8(out)?))
    }

    fn output_of(args: &[&str]) -> String {
        let (ok, text) = run_args(args, &HarnessConfig::default()).unwrap();
        assert!(ok);
        text
    }

    #[test]
    fn test_solve_prints_pair() {
        assert_eq!(output_of(&["solve", "-t", "9", "2", "7", "11", "15"]), "[0, 1]\n");
        assert_eq!(output_of(&["solve", "-s", "brute", "-t", "6", "3,2,4"]), "[1, 2]\n");
    }

    #[test]
    fn test_solve_without_pair() {
        assert_eq!(output_of(&["solve", "-t", "100", "1", "2"]), "no solution\n");
        assert_eq!(output_of(&["solve", "-t", "0"]), "no solution\n");
    }

    #[test]
    fn test_selftest_uses_configured_strategies() {
        let config = HarnessConfig {
            strategies: vec![Strategy::TwoPointer],
            ..HarnessConfig::default()
        };
        let (ok, text) = run_args(&["selftest", "--json"], &config).unwrap();
        assert!(ok);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let outcomes = json["outcomes"].as_array().unwrap();
        assert!(!outcomes.is_empty());
        assert!(outcomes.iter().all(|outcome| outcome["strategy"] == "two-pointer"));

        let (ok, text) = run_args(&["selftest", "--json", "-s", "brute"], &config).unwrap();
        assert!(ok);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let outcomes = json["outcomes"].as_array().unwrap();
        assert!(outcomes.iter().all(|outcome| outcome["strategy"] == "brute"));
    }

    #[test]
    fn test_selftest_text_report() {
        let text = output_of(&["selftest"]);
        assert!(text.ends_with(" passed, 0 failed\n"), "{}", text);
    }

    #[test]
    fn test_failed_selftest_returns_false() {
        static WRONG: &[Scenario] = &[Scenario {
            nums: &[2, 7, 11, 15],
            target: 9,
            expected: Some([2, 3]),
        }];
        let report = SelfTest::new(vec![Strategy::HashIndex])
            .with_scenarios(WRONG)
            .run();
        let mut out = Vec::new();
        assert!(!write_selftest(&report, false, &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("0 passed, 1 failed\n"), "{}", text);
    }

    #[test]
    fn test_bench_flags_override_config() {
        let config = HarnessConfig {
            bench_size: 50,
            ..HarnessConfig::default()
        };
        let (ok, text) = run_args(&["bench", "-n", "20", "--json"], &config).unwrap();
        assert!(ok);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["size"], 20);
        assert_eq!(json["target"], 37);

        let (_, text) = run_args(&["bench", "--json"], &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["size"], 50);
    }

    #[test]
    fn test_bench_rejects_huge_size() {
        let err = run_args(&["bench", "-n", "18446744073709551615"], &HarnessConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::BenchSizeTooLarge { .. })
        ));
    }

    #[test]
    fn test_duplicates_variants() {
        assert_eq!(output_of(&["duplicates", "1", "2", "3", "1"]), "true\n");
        assert_eq!(
            output_of(&["duplicates", "--variant", "brute-force", "1", "2", "3"]),
            "false\n"
        );
    }

    #[test]
    fn test_prefix_variants() {
        for variant in ["optimal", "brute-force"] {
            assert_eq!(
                output_of(&["prefix", "--variant", variant, "flower", "flow", "flight"]),
                "\"fl\"\n"
            );
        }
    }

    #[test]
    fn test_prefix_compare() {
        let text = output_of(&["prefix", "--compare"]);
        assert!(text.starts_with("Words: 3000\n"), "{}", text);
        assert!(text.contains("Speedup:"));
    }
}
