//! Dictionary of words.
pub mod automaton;
pub(crate) mod builder;

use std::io::{Read, Write};

use bincode::{Decode, Encode};

use crate::common;
use crate::errors::{DamatchError, Result};
use crate::utils::FromU32;
use automaton::{DoubleArray, PrefixMatcher};

pub use builder::DictionaryBuilder;

/// Identifier of a word, i.e., its position in the dictionary.
pub type WordId = u32;

/// Magic bytes at the head of a dictionary image.
pub const MODEL_MAGIC: &[u8] = b"DamatchDictionary 0.2\n";

/// Inner data of [`Dictionary`].
#[derive(Default, Decode, Encode)]
struct DictionaryInner {
    words: Vec<String>,
    max_word_len: usize,
    automaton: DoubleArray,
}

/// Dictionary of words indexed by their ids.
///
/// Words are never removed, and ids are never reused.
/// The automaton always stores exactly the words of the list.
#[derive(Default)]
pub struct Dictionary(DictionaryInner);

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(words: Vec<String>, max_word_len: usize, automaton: DoubleArray) -> Self {
        debug_assert_eq!(words.len(), automaton.num_keys());
        Self(DictionaryInner {
            words,
            max_word_len,
            automaton,
        })
    }

    /// Gets the number of words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.0.words.len()
    }

    /// Gets the maximum length of words in bytes.
    #[inline(always)]
    pub const fn max_word_len(&self) -> usize {
        self.0.max_word_len
    }

    /// Gets the word of the given id.
    #[inline(always)]
    pub fn word(&self, word_id: WordId) -> Option<&str> {
        self.0
            .words
            .get(usize::from_u32(word_id))
            .map(String::as_str)
    }

    /// Gets all the words in the order of their ids.
    #[inline(always)]
    pub fn words(&self) -> &[String] {
        &self.0.words
    }

    /// Gets the id of the word if it is registered.
    #[inline(always)]
    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.0.automaton.exact_match(word)
    }

    #[inline(always)]
    pub(crate) const fn automaton(&self) -> &DoubleArray {
        &self.0.automaton
    }

    /// Registers a word, and returns its id.
    ///
    /// If the word is already registered, nothing changes and the existing id is returned.
    /// Otherwise, the word gets the next id, i.e., the current number of words.
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when the word is empty
    /// or the number of words exceeds the range of [`WordId`].
    pub fn insert(&mut self, word: &str) -> Result<WordId> {
        if let Some(word_id) = self.0.automaton.exact_match(word) {
            return Ok(word_id);
        }
        if word.is_empty() {
            return Err(DamatchError::invalid_argument(
                "word",
                "an empty word can not be registered.",
            ));
        }
        let word_id = WordId::try_from(self.0.words.len())?;
        self.0.automaton.update(word, word_id)?;
        self.0.words.push(word.to_string());
        self.0.max_word_len = self.0.max_word_len.max(word.len());
        log::debug!("registered {word:?} as {word_id}");
        Ok(word_id)
    }

    /// Registers words in order by [`Dictionary::insert()`].
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when a word can not be registered.
    /// Words before the failed one stay registered.
    pub fn insert_words<I, W>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref())?;
        }
        Ok(())
    }

    /// Exports the dictionary data.
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    pub fn write<W>(&self, mut wtr: W) -> Result<usize>
    where
        W: Write,
    {
        wtr.write_all(MODEL_MAGIC)?;
        let num_bytes =
            bincode::encode_into_std_write(&self.0, &mut wtr, common::bincode_config())?;
        log::debug!("wrote {} words in {num_bytes} bytes", self.num_words());
        Ok(MODEL_MAGIC.len() + num_bytes)
    }

    /// Creates a dictionary from a reader of the data exported by [`Dictionary::write()`].
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when the magic bytes mismatch or the data is broken.
    /// When bincode generates an error, it will be returned as is.
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        if magic != MODEL_MAGIC {
            return Err(DamatchError::invalid_argument(
                "rdr",
                "The magic number of the input model mismatches.",
            ));
        }
        let inner: DictionaryInner = bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        if inner.words.len() != inner.automaton.num_keys() {
            return Err(DamatchError::invalid_argument(
                "rdr",
                "The word list and the automaton are out of sync.",
            ));
        }
        log::debug!("read {} words", inner.words.len());
        Ok(Self(inner))
    }
}
