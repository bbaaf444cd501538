//! Prefix-matching automaton that maps words to their ids.
mod double_array;

use crate::errors::Result;
use crate::dictionary::WordId;

pub use double_array::DoubleArray;

/// Result of a common-prefix query.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct PrefixMatch {
    /// Id of the matched word.
    pub word_id: WordId,

    /// Length of the matched prefix in bytes.
    pub len: usize,
}

impl PrefixMatch {
    /// Creates a new instance.
    #[inline(always)]
    pub const fn new(word_id: WordId, len: usize) -> Self {
        Self { word_id, len }
    }
}

/// Capabilities required from an automaton storing the dictionary.
///
/// Implementations hold only word ids, never references into the word list.
pub trait PrefixMatcher {
    /// Gets the id of `key` if it is stored.
    fn exact_match(&self, key: &str) -> Option<WordId>;

    /// Appends every stored key that is a prefix of `haystack` to `out`,
    /// in ascending order of length.
    ///
    /// At most `capacity` matches are appended; the longer ones beyond the cap
    /// are silently dropped.
    fn common_prefix_matches(&self, haystack: &str, capacity: usize, out: &mut Vec<PrefixMatch>);

    /// Stores a new mapping from `key` to `word_id`.
    ///
    /// # Errors
    ///
    /// [`DamatchError`](crate::errors::DamatchError) is returned when `key` is empty
    /// or is already mapped to another id.
    fn update(&mut self, key: &str, word_id: WordId) -> Result<()>;

    /// Gets the number of stored keys.
    fn num_keys(&self) -> usize;
}
