//! # Corpus Word Counter

use compact_str::CompactString;

use crate::spanning::split_words;
use crate::types::WvHashMap;

/// First-seen-ordered word frequency table.
///
/// Iteration follows the order words were first observed in the corpus,
/// so downstream id assignment is reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    /// Distinct words, in first-seen order.
    words: Vec<CompactString>,

    /// Occurrence counts, parallel to `words`.
    counts: Vec<u64>,

    /// The reverse map of words to their index.
    index: WvHashMap<CompactString, usize>,
}

impl WordCounter {
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a word.
    ///
    /// ## Arguments
    /// * `word` - The word to count.
    pub fn add_word(
        &mut self,
        word: &CompactString,
    ) {
        if let Some(&idx) = self.index.get(word) {
            self.counts[idx] += 1;
        } else {
            self.index.insert(word.clone(), self.words.len());
            self.words.push(word.clone());
            self.counts.push(1);
        }
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// Each sample is split through the word splitter before counting.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            for word in split_words(sample.as_ref()) {
                self.add_word(&word);
            }
        }
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the counter is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over ``(word, count)`` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, u64)> {
        self.words.iter().zip(self.counts.iter().copied())
    }

    /// Decompose into parallel word and count tables, in first-seen order.
    pub fn into_parts(self) -> (Vec<CompactString>, Vec<u64>) {
        (self.words, self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter_order_and_counts() {
        let mut counter = WordCounter::new();
        counter.update_from_samples(["the cat, the hat"]);
        counter.update_from_samples(["THE Cat"]);

        assert_eq!(counter.len(), 4);
        assert!(!counter.is_empty());

        // First-seen order; counts are case-folded.
        assert_eq!(
            counter.iter().collect::<Vec<_>>(),
            vec![
                (&CompactString::from("the"), 3),
                (&CompactString::from("cat"), 2),
                (&CompactString::from(","), 1),
                (&CompactString::from("hat"), 1),
            ]
        );
    }

    #[test]
    fn test_word_counter_empty() {
        let mut counter = WordCounter::new();
        assert!(counter.is_empty());

        counter.update_from_samples(["", "   "]);
        assert!(counter.is_empty());
    }
}
