// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Self-test runner.
//!
//! Runs known scenarios through a set of strategies and records one
//! [`CaseOutcome`] per (strategy, scenario). The report renders as the
//! familiar `Test Case N: ✓` listing, or serializes to JSON.

use crate::harness::scenarios::{Scenario, NO_SOLUTION_SCENARIOS, SCENARIOS};
use crate::harness::statistics::{Counters, Statistics};
use crate::pair::IndexPair;
use crate::two_sum::{PairFinder, Strategy};
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt::Write;

/// The result of running one scenario through one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub strategy: Strategy,
    /// 1-based position of the scenario in the run.
    pub case: usize,
    pub nums: Vec<i64>,
    pub target: i64,
    pub expected: Option<IndexPair>,
    pub actual: Option<IndexPair>,
    pub passed: bool,
}

/// All outcomes of a self-test run, with totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelfTestReport {
    pub outcomes: Vec<CaseOutcome>,
    pub statistics: Statistics,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.statistics.get(Counters::Failed) == 0
    }

    /// Outcomes that did not match the expected answer.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    /// Human-readable listing, grouped by strategy.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut current: Option<Strategy> = None;

        for outcome in &self.outcomes {
            if current != Some(outcome.strategy) {
                if current.is_some() {
                    out.push('\n');
                }
                let _ = writeln!(out, "Testing Two Sum ({}):\n", outcome.strategy);
                current = Some(outcome.strategy);
            }
            let status = if outcome.passed { "✓" } else { "✗" };
            let _ = writeln!(out, "Test Case {}: {}", outcome.case, status);
            let _ = writeln!(
                out,
                "  Input: nums = {:?}, target = {}",
                outcome.nums, outcome.target
            );
            let _ = writeln!(out, "  Output: {}", describe(outcome.actual));
            let _ = writeln!(out, "  Expected: {}", describe(outcome.expected));
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "{} passed, {} failed",
            self.statistics.get(Counters::Passed),
            self.statistics.get(Counters::Failed)
        );
        out
    }
}

fn describe(pair: Option<IndexPair>) -> String {
    pair.map_or_else(|| String::from("no solution"), |pair| pair.to_string())
}

/// Runs scenarios through strategies.
#[derive(Debug, Clone)]
pub struct SelfTest {
    strategies: Vec<Strategy>,
    scenarios: Vec<Scenario>,
}

impl Default for SelfTest {
    /// Every strategy over every known scenario.
    fn default() -> Self {
        Self::new(Strategy::all().collect())
    }
}

impl SelfTest {
    /// A run over the known scenarios, both solvable and unsolvable.
    pub fn new(strategies: Vec<Strategy>) -> Self {
        let scenarios = SCENARIOS
            .iter()
            .chain(NO_SOLUTION_SCENARIOS)
            .copied()
            .collect();
        Self {
            strategies,
            scenarios,
        }
    }

    /// Replace the scenarios to run.
    pub fn with_scenarios(mut self, scenarios: &[Scenario]) -> Self {
        self.scenarios = scenarios.to_vec();
        self
    }

    pub fn run(&self) -> SelfTestReport {
        let mut report = SelfTestReport::default();

        for &strategy in &self.strategies {
            debug!("self-test: running {} scenarios with {}", self.scenarios.len(), strategy);
            for (i, scenario) in self.scenarios.iter().enumerate() {
                let outcome = run_case(strategy, i + 1, scenario);
                report.statistics.increment(if outcome.passed {
                    Counters::Passed
                } else {
                    Counters::Failed
                });
                if outcome.actual.is_none() {
                    report.statistics.increment(Counters::NoSolution);
                }
                if !outcome.passed {
                    warn!(
                        "self-test: {} case {} returned {}, expected {}",
                        strategy,
                        outcome.case,
                        describe(outcome.actual),
                        describe(outcome.expected)
                    );
                }
                report.outcomes.push(outcome);
            }
        }

        info!(
            "self-test: {} of {} cases passed",
            report.statistics.get(Counters::Passed),
            report.statistics.cases()
        );
        report
    }
}

fn run_case(strategy: Strategy, case: usize, scenario: &Scenario) -> CaseOutcome {
    let expected = scenario.expected_pair();
    let actual = strategy.find_pair(scenario.nums, scenario.target);
    CaseOutcome {
        strategy,
        case,
        nums: scenario.nums.to_vec(),
        target: scenario.target,
        expected,
        actual,
        passed: actual == expected,
    }
}
