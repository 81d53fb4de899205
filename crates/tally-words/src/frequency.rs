//! Word frequency accumulation and ranked ordering.

use std::collections::HashMap;

/// Occurrence counts for case-sensitive words.
///
/// Words that never occurred have no entry. Observable ordering is always
/// produced by [`WordFrequencyTable::ranked`], never by map iteration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Builds the table in a single pass over the words.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_words::WordFrequencyTable;
    ///
    /// let table = WordFrequencyTable::from_words(["a", "b", "a"]);
    /// assert_eq!(table.count("a"), 2);
    /// assert_eq!(table.count("missing"), 0);
    /// ```
    #[must_use]
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
        WordFrequencyTable { counts }
    }

    /// Occurrence count for a word, zero when it never occurred.
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no word was counted at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rows sorted by count descending, ties broken by word ascending.
    ///
    /// This is the externally observed row order of the word-count report
    /// and is fully deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_words::WordFrequencyTable;
    ///
    /// let table = WordFrequencyTable::from_words(["b", "a", "a", "c", "b", "a"]);
    /// assert_eq!(table.ranked(), [("a", 3), ("b", 2), ("c", 1)]);
    /// ```
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut rows = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_is_case_sensitive() {
        let table = WordFrequencyTable::from_words(["The", "the", "the"]);
        assert_eq!(table.count("The"), 1);
        assert_eq!(table.count("the"), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_ranked_orders_by_count_then_word() {
        let table = WordFrequencyTable::from_words(["b", "a", "a", "c", "b", "a"]);
        assert_eq!(table.ranked(), [("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_ranked_breaks_count_ties_alphabetically() {
        let table = WordFrequencyTable::from_words(["pear", "apple", "pear", "apple"]);
        assert_eq!(table.ranked(), [("apple", 2), ("pear", 2)]);
    }

    #[test]
    fn test_empty_table() {
        let table = WordFrequencyTable::from_words([]);
        assert!(table.is_empty());
        assert!(table.ranked().is_empty());
    }
}
