//! Dictionary-driven segmenter and multi-pattern matcher.
mod backward;
mod forward;
mod parse;

use crate::common::DEFAULT_MAX_PREFIX_MATCHES;
use crate::dictionary::{Dictionary, WordId};
use crate::errors::{DamatchError, Result};
use crate::token::{Match, Token};

pub use backward::backward_matches;
pub use forward::forward_matches;
pub use parse::parse_matches;

/// Scanning direction of segmentation.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum Direction {
    /// Maximal matching from the left.
    #[default]
    Forward,
    /// Window-based matching from the right.
    Backward,
}

/// Matcher.
///
/// It owns the dictionary, so the words are registered through it
/// and queries always see the current words.
pub struct Matcher {
    dict: Dictionary,
    max_prefix_matches: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Dictionary::default())
    }
}

impl Matcher {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `dict`: Dictionary to be used.
    pub const fn new(dict: Dictionary) -> Self {
        Self {
            dict,
            max_prefix_matches: DEFAULT_MAX_PREFIX_MATCHES,
        }
    }

    /// Specifies the maximum number of prefix matches examined at one position.
    /// By default, the number is [`DEFAULT_MAX_PREFIX_MATCHES`].
    ///
    /// Matches beyond the number, i.e., the longest ones, are silently dropped.
    /// Forward matching then takes the longest of the remaining ones,
    /// and parsing does not report the dropped ones.
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when `max_prefix_matches` is zero.
    pub fn max_prefix_matches(mut self, max_prefix_matches: usize) -> Result<Self> {
        if max_prefix_matches == 0 {
            return Err(DamatchError::invalid_argument(
                "max_prefix_matches",
                "must be positive.",
            ));
        }
        self.max_prefix_matches = max_prefix_matches;
        Ok(self)
    }

    /// Gets the reference to the dictionary.
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Gets the number of words.
    pub fn num_words(&self) -> usize {
        self.dict.num_words()
    }

    /// Registers a word. See [`Dictionary::insert()`].
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when the word can not be registered.
    pub fn insert(&mut self, word: &str) -> Result<WordId> {
        self.dict.insert(word)
    }

    /// Registers words in order. See [`Dictionary::insert_words()`].
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when a word can not be registered.
    pub fn insert_words<I, W>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.dict.insert_words(words)
    }

    /// Computes the forward maximal matching of the text into `out`.
    pub fn forward_matches(&self, text: &str, out: &mut Vec<Match>) {
        forward_matches(
            self.dict.automaton(),
            text,
            self.max_prefix_matches,
            &mut vec![],
            out,
        );
        log::trace!("forward: {} bytes into {} spans", text.len(), out.len());
    }

    /// Computes the backward matching of the text into `out`.
    pub fn backward_matches(&self, text: &str, out: &mut Vec<Match>) {
        backward_matches(self.dict.automaton(), self.dict.max_word_len(), text, out);
        log::trace!("backward: {} bytes into {} spans", text.len(), out.len());
    }

    /// Computes all the occurrences of words in the text into `out`.
    pub fn parse_matches(&self, text: &str, out: &mut Vec<Match>) {
        parse_matches(
            self.dict.automaton(),
            text,
            self.max_prefix_matches,
            &mut vec![],
            out,
        );
        log::trace!("parse: {} bytes with {} occurrences", text.len(), out.len());
    }

    /// Segments the text into tokens.
    ///
    /// The tokens cover the whole text without overlaps, in the order of offsets.
    pub fn segment<'a>(&self, text: &'a str, direction: Direction) -> Vec<Token<'a>> {
        let mut matches = vec![];
        match direction {
            Direction::Forward => self.forward_matches(text, &mut matches),
            Direction::Backward => self.backward_matches(text, &mut matches),
        }
        matches.into_iter().map(|m| Token::new(text, m)).collect()
    }

    /// Finds all the occurrences of words in the text.
    pub fn parse<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut matches = vec![];
        self.parse_matches(text, &mut matches);
        matches.into_iter().map(|m| Token::new(text, m)).collect()
    }
}
