// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known Two Sum inputs with their unique solutions.

use crate::pair::IndexPair;

/// One input with its expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub nums: &'static [i64],
    pub target: i64,
    /// `[low, high]`, or `None` when the input has no solution.
    pub expected: Option<[usize; 2]>,
}

impl Scenario {
    /// The expected answer as an [`IndexPair`].
    pub fn expected_pair(&self) -> Option<IndexPair> {
        self.expected.map(|[a, b]| IndexPair::new(a, b))
    }
}

/// Every scenario here has at most one valid pair, so all strategies must
/// return exactly the expected answer.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        nums: &[2, 7, 11, 15],
        target: 9,
        expected: Some([0, 1]),
    },
    Scenario {
        nums: &[3, 2, 4],
        target: 6,
        expected: Some([1, 2]),
    },
    Scenario {
        nums: &[3, 3],
        target: 6,
        expected: Some([0, 1]),
    },
    Scenario {
        nums: &[-1, -2, -3, -4, -5],
        target: -8,
        expected: Some([2, 4]),
    },
    Scenario {
        nums: &[0, 4, 3, 0],
        target: 0,
        expected: Some([0, 3]),
    },
];

/// Inputs with no valid pair, including the malformed short sequences.
pub const NO_SOLUTION_SCENARIOS: &[Scenario] = &[
    Scenario {
        nums: &[],
        target: 0,
        expected: None,
    },
    Scenario {
        nums: &[5],
        target: 10,
        expected: None,
    },
    Scenario {
        nums: &[1, 2, 3],
        target: 7,
        expected: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_pairs_are_solutions() {
        for scenario in SCENARIOS {
            let pair = scenario.expected_pair().unwrap();
            assert!(pair.is_solution(scenario.nums, scenario.target));
            assert_eq!(pair.as_array(), scenario.expected.unwrap());
        }
    }
}
