// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{random_case, seeded};
use pair_sum::exercises::{
    contains_duplicate, contains_duplicate_brute_force, contains_duplicate_counting,
    longest_common_prefix, longest_common_prefix_vertical,
};

#[test]
fn test_known_prefixes() {
    assert_eq!(longest_common_prefix(&["flower", "flow", "flight"]), "fl");
    assert_eq!(longest_common_prefix(&["dog", "racecar", "car"]), "");
}

#[test]
fn test_large_prefix_input() {
    let mut words = Vec::new();
    for word in ["flower", "flow", "flight"] {
        words.extend(std::iter::repeat(word).take(1000));
    }
    assert_eq!(longest_common_prefix(&words), "fl");
    assert_eq!(longest_common_prefix_vertical(&words), "fl");
}

#[test]
fn test_known_duplicates() {
    assert!(contains_duplicate(&[1, 2, 3, 1]));
    assert!(!contains_duplicate(&[1, 2, 3, 4]));
}

#[test]
fn test_duplicate_variants_agree() {
    let mut rng = seeded(11);
    for _ in 0..500 {
        let (nums, _) = random_case(&mut rng, 20, 30);
        let expected = contains_duplicate_brute_force(&nums);
        assert_eq!(contains_duplicate(&nums), expected, "{:?}", nums);
        assert_eq!(contains_duplicate_counting(&nums), expected, "{:?}", nums);
    }
}
