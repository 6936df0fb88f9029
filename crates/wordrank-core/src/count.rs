//! Word-frequency aggregation with stable first-seen ordering.

use std::collections::HashMap;

/// Word occurrence counts, preserving the order words were first seen
/// so that equal-count ties rank deterministically downstream.
///
/// Built once from a token sequence and immutable afterwards. An empty
/// `WordCounts` is a valid value, distinct from "no counts available".
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl WordCounts {
    /// Aggregates `words` into counts. Empty input yields an empty
    /// (but valid) value.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = WordCounts::default();
        for word in words {
            match counts.index.get(&word) {
                Some(&i) => counts.entries[i].1 += 1,
                None => {
                    counts.index.insert(word.clone(), counts.entries.len());
                    counts.entries.push((word, 1));
                }
            }
        }
        counts
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of `word`, 0 if never seen.
    pub fn count(&self, word: &str) -> u64 {
        self.index.get(word).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, u64)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_match_occurrences() {
        let counts = WordCounts::from_words(words(&["a", "a", "b", "b", "b", "c"]));
        assert_eq!(counts.count("a"), 2);
        assert_eq!(counts.count("b"), 3);
        assert_eq!(counts.count("c"), 1);
        assert_eq!(counts.count("missing"), 0);
    }

    #[test]
    fn total_preserved_and_unique_bounded() {
        let input = words(&["x", "y", "x", "z", "x", "y"]);
        let counts = WordCounts::from_words(input.clone());
        assert_eq!(counts.total(), input.len() as u64);
        assert!(counts.len() <= input.len());
    }

    #[test]
    fn first_seen_order_is_kept() {
        let counts = WordCounts::from_words(words(&["beta", "alpha", "beta", "gamma"]));
        let order: Vec<&str> = counts.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn empty_input_is_empty_but_valid() {
        let counts = WordCounts::from_words(Vec::new());
        assert!(counts.is_empty());
        assert_eq!(counts.len(), 0);
        assert_eq!(counts.total(), 0);
    }
}
