//! Word list bucketed by length.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;

/// Immutable set of playable words, grouped by letter count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    buckets: BTreeMap<usize, BTreeSet<String>>,
    len: usize,
}

impl Dictionary {
    /// Build a dictionary from raw entries. Entries are trimmed and
    /// uppercased; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Dictionary::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_uppercase();
            let bucket = dict.buckets.entry(word.chars().count()).or_default();
            if bucket.insert(word) {
                dict.len += 1;
            }
        }
        log::debug!(
            "dictionary loaded: {} words in {} length buckets",
            dict.len,
            dict.buckets.len()
        );
        dict
    }

    /// `true` when `word` is playable. Lookup is exact: callers pass
    /// uppercase words.
    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&word.chars().count())
            .is_some_and(|bucket| bucket.contains(word))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
