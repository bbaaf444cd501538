use std::collections::BTreeMap;

use crate::dictionary::automaton::{PrefixMatch, PrefixMatcher};
use crate::dictionary::WordId;
use crate::errors::{DamatchError, Result};

/// Automaton over a plain ordered map, for checking the scanners
/// independently of the double array.
#[derive(Default)]
pub struct NaiveMatcher {
    map: BTreeMap<String, WordId>,
    max_word_len: usize,
}

impl NaiveMatcher {
    /// Ids are given in the order of `words`.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut m = Self::default();
        for (i, w) in words.into_iter().enumerate() {
            m.update(w.as_ref(), WordId::try_from(i).unwrap()).unwrap();
        }
        m
    }

    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

impl PrefixMatcher for NaiveMatcher {
    fn exact_match(&self, key: &str) -> Option<WordId> {
        self.map.get(key).copied()
    }

    fn common_prefix_matches(&self, haystack: &str, capacity: usize, out: &mut Vec<PrefixMatch>) {
        let prefixes = (1..=haystack.len())
            .filter(|&end| haystack.is_char_boundary(end))
            .filter_map(|end| {
                self.map
                    .get(&haystack[..end])
                    .map(|&word_id| PrefixMatch::new(word_id, end))
            })
            .take(capacity);
        out.extend(prefixes);
    }

    fn update(&mut self, key: &str, word_id: WordId) -> Result<()> {
        if key.is_empty() || self.map.contains_key(key) {
            return Err(DamatchError::invalid_argument("key", key));
        }
        self.map.insert(key.to_string(), word_id);
        self.max_word_len = self.max_word_len.max(key.len());
        Ok(())
    }

    fn num_keys(&self) -> usize {
        self.map.len()
    }
}
