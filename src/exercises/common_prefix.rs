// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest Common Prefix of a list of words.
//!
//! Both variants compare whole `char`s, so the prefix never ends in the
//! middle of a UTF-8 sequence. An empty list has the empty prefix.

use log::debug;

/// Horizontal scan: start with the first word and shrink it against each
/// following word. Stops early once the prefix is empty.
///
/// O(S) time where S is the total number of characters, O(1) extra space
/// besides the returned string.
pub fn longest_common_prefix<S: AsRef<str>>(words: &[S]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut prefix: &str = first.as_ref();

    for word in rest {
        let matched = prefix
            .char_indices()
            .zip(word.as_ref().chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((at, c), _)| at + c.len_utf8());
        prefix = &prefix[..matched];
        if prefix.is_empty() {
            break;
        }
    }

    debug!("common-prefix: {} words, prefix {:?}", words.len(), prefix);
    prefix.to_string()
}

/// Vertical scan: compare column by column across every word.
///
/// O(m·n) for n words and a first word of m characters.
pub fn longest_common_prefix_vertical<S: AsRef<str>>(words: &[S]) -> String {
    let Some(first) = words.first() else {
        return String::new();
    };
    let mut columns: Vec<_> = words.iter().map(|word| word.as_ref().chars()).collect();
    let mut prefix = String::new();

    for c in first.as_ref().chars() {
        for column in columns.iter_mut() {
            if column.next() != Some(c) {
                return prefix;
            }
        }
        prefix.push(c);
    }
    prefix
}
