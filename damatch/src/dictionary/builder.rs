use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::dictionary::automaton::DoubleArray;
use crate::dictionary::{Dictionary, WordId};
use crate::errors::{DamatchError, Result};

/// Builder of a [`Dictionary`] from word lists.
///
/// Words from all the lists are merged, sorted in byte order, and deduplicated,
/// and then each word gets its position as the id.
#[derive(Default)]
pub struct DictionaryBuilder {
    words: Vec<String>,
    max_word_len: usize,
}

impl DictionaryBuilder {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds words. Empty words are skipped.
    pub fn add_words<I, W>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        for word in words {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            self.max_word_len = self.max_word_len.max(word.len());
            self.words.push(word);
        }
        self
    }

    /// Adds words from a reader of a newline-delimited list.
    ///
    /// Lines are taken verbatim except the terminating `\n`, and empty lines are skipped.
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when a line is not valid UTF-8 or reading fails.
    pub fn add_reader<R>(&mut self, rdr: R) -> Result<&mut Self>
    where
        R: Read,
    {
        let rdr = BufReader::new(rdr);
        let mut words = vec![];
        for (i, line) in rdr.split(b'\n').enumerate() {
            let word = String::from_utf8(line?).map_err(|e| {
                DamatchError::invalid_argument("rdr", format!("line {}: {e}", i + 1))
            })?;
            words.push(word);
        }
        Ok(self.add_words(words))
    }

    /// Builds the dictionary.
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when the automaton can not be built.
    pub fn build(self) -> Result<Dictionary> {
        let Self {
            mut words,
            max_word_len,
        } = self;
        let num_lines = words.len();
        words.sort_unstable();
        words.dedup();

        let records = words
            .iter()
            .enumerate()
            .map(|(i, w)| -> Result<_> { Ok((w.as_str(), WordId::try_from(i)?)) })
            .collect::<Result<Vec<_>>>()?;
        let automaton = DoubleArray::from_records(&records)?;

        log::debug!(
            "built a dictionary of {} words from {num_lines} entries (max length {max_word_len} bytes)",
            words.len()
        );
        Ok(Dictionary::from_parts(words, max_word_len, automaton))
    }
}

impl Dictionary {
    /// Creates a new instance from readers of newline-delimited word lists.
    ///
    /// # Arguments
    ///
    ///  - `dict_rdr`: A reader of the main word list.
    ///  - `user_dict_rdr`: A reader of an additional word list, merged before deduplication.
    ///
    /// # Errors
    ///
    /// [`DamatchError`] is returned when an input format is invalid.
    pub fn from_readers<D, U>(dict_rdr: D, user_dict_rdr: Option<U>) -> Result<Self>
    where
        D: Read,
        U: Read,
    {
        let mut builder = DictionaryBuilder::new();
        builder.add_reader(dict_rdr)?;
        if let Some(user_dict_rdr) = user_dict_rdr {
            builder.add_reader(user_dict_rdr)?;
        }
        builder.build()
    }

    /// Creates a new instance from paths of newline-delimited word lists.
    ///
    /// Both files are opened before anything is built.
    ///
    /// # Errors
    ///
    /// [`DamatchError::SourceUnavailable`] is returned when a file can not be opened.
    /// [`DamatchError`] is returned when an input format is invalid.
    pub fn from_paths<D, U>(dict_path: D, user_dict_path: Option<U>) -> Result<Self>
    where
        D: AsRef<Path>,
        U: AsRef<Path>,
    {
        let dict_rdr = open(dict_path.as_ref())?;
        let user_dict_rdr = user_dict_path.map(|p| open(p.as_ref())).transpose()?;
        Self::from_readers(dict_rdr, user_dict_rdr)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| DamatchError::source_unavailable(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorts_and_dedups() {
        let mut builder = DictionaryBuilder::new();
        builder.add_words(["大学", "北京大学", "", "北京", "大学"]);
        let dict = builder.build().unwrap();
        assert_eq!(
            dict.words(),
            &["北京".to_string(), "北京大学".to_string(), "大学".to_string()]
        );
        assert_eq!(dict.max_word_len(), 12);
        for (i, w) in dict.words().iter().enumerate() {
            assert_eq!(dict.word_id(w), Some(i as WordId));
        }
    }

    #[test]
    fn test_from_readers_merges_lists() {
        let dict = Dictionary::from_readers("b\n\na\n".as_bytes(), Some("c\nb\n".as_bytes())).unwrap();
        assert_eq!(
            dict.words(),
            &["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_from_readers_keeps_carriage_return() {
        let dict = Dictionary::from_readers("a\r\nb".as_bytes(), None::<&[u8]>).unwrap();
        assert_eq!(dict.words(), &["a\r".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_from_readers_invalid_utf8() {
        let result = Dictionary::from_readers(b"a\n\xff\xfe\n".as_slice(), None::<&[u8]>);
        assert!(matches!(result, Err(DamatchError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_empty() {
        let dict = DictionaryBuilder::new().build().unwrap();
        assert_eq!(dict.num_words(), 0);
        assert_eq!(dict.max_word_len(), 0);
    }
}
