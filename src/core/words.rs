//! Word counting, memoized counts and line sequence matching

use std::collections::HashMap;

/// Count whitespace-separated words
pub fn word_count(document: &str) -> usize {
    document.split_whitespace().count()
}

/// Count words in `document`, reusing a memoized value when one exists.
///
/// The memo table is never modified; the returned table is a copy that
/// always contains `document`.
pub fn word_count_memo(
    document: &str,
    memos: &HashMap<String, usize>,
) -> (usize, HashMap<String, usize>) {
    let mut updated = memos.clone();
    if let Some(&count) = memos.get(document) {
        return (count, updated);
    }

    let count = word_count(document);
    updated.insert(document.to_string(), count);
    (count, updated)
}

/// Running word total across every document passed to it
#[derive(Debug, Clone, Default)]
pub struct WordCountAggregator {
    total: usize,
}

impl WordCountAggregator {
    /// Add the words of `document` to the running total and return it
    pub fn add(&mut self, document: &str) -> usize {
        self.total += word_count(document);
        tracing::debug!("Word total is now {}", self.total);
        self.total
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Start a new, independent word total
pub fn word_count_aggregator() -> WordCountAggregator {
    WordCountAggregator::default()
}

/// Longest word in the document; the first one wins ties
pub fn find_longest_word(document: &str) -> &str {
    document
        .split_whitespace()
        .fold("", |longest, word| {
            if word.chars().count() > longest.chars().count() {
                word
            } else {
                longest
            }
        })
}

/// Curried line counter: pick the character, then the run length, then
/// the document. Returns how many lines contain the run.
pub fn lines_with_sequence(ch: char) -> impl Fn(usize) -> Box<dyn Fn(&str) -> usize> {
    move |length: usize| -> Box<dyn Fn(&str) -> usize> {
        let sequence: String = std::iter::repeat(ch).take(length).collect();
        Box::new(move |document: &str| {
            document
                .split('\n')
                .filter(|line| line.contains(sequence.as_str()))
                .count()
        })
    }
}
