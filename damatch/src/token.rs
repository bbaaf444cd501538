//! Containers of resultant matches and tokens.
use std::ops::Range;

use crate::dictionary::WordId;

/// Span of a text found by a segmenter or the parser.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Match {
    /// Starting position in bytes.
    pub start: usize,

    /// Length in bytes.
    pub len: usize,

    /// Id of the matched word, or `None` for an unknown span.
    pub word_id: Option<WordId>,
}

impl Match {
    /// Creates a new instance.
    #[inline(always)]
    pub const fn new(start: usize, len: usize, word_id: Option<WordId>) -> Self {
        Self {
            start,
            len,
            word_id,
        }
    }

    /// Creates a span of out-of-vocabulary text.
    #[inline(always)]
    pub const fn unknown(start: usize, len: usize) -> Self {
        Self::new(start, len, None)
    }

    /// Gets the position range in bytes.
    #[inline(always)]
    pub const fn range_byte(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Checks if the span is out of vocabulary.
    #[inline(always)]
    pub const fn is_unknown(&self) -> bool {
        self.word_id.is_none()
    }
}

/// Resultant token, borrowing the input text.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    offset: usize,
    surface: &'a str,
    word_id: Option<WordId>,
}

impl<'a> Token<'a> {
    #[inline(always)]
    pub(crate) fn new(text: &'a str, m: Match) -> Self {
        Self {
            offset: m.start,
            surface: &text[m.range_byte()],
            word_id: m.word_id,
        }
    }

    /// Gets the starting position in bytes.
    #[inline(always)]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Gets the position range in bytes.
    #[inline(always)]
    pub const fn range_byte(&self) -> Range<usize> {
        self.offset..self.offset + self.surface.len()
    }

    /// Gets the surface string.
    #[inline(always)]
    pub const fn surface(&self) -> &'a str {
        self.surface
    }

    /// Gets the word id, or `None` for an unknown span.
    #[inline(always)]
    pub const fn word_id(&self) -> Option<WordId> {
        self.word_id
    }

    /// Checks if the token is out of vocabulary.
    #[inline(always)]
    pub const fn is_unknown(&self) -> bool {
        self.word_id.is_none()
    }
}

/// Conversion from byte positions into character positions of a text.
pub struct CharPositions {
    b2c: Vec<usize>,
}

impl CharPositions {
    /// Creates the table for the text.
    pub fn new(text: &str) -> Self {
        let mut b2c = vec![usize::MAX; text.len() + 1];
        for (ci, (bi, _)) in text.char_indices().enumerate() {
            b2c[bi] = ci;
        }
        b2c[text.len()] = text.chars().count();
        Self { b2c }
    }

    /// Gets the character position of the byte position,
    /// or `None` if it is not on a character boundary.
    #[inline(always)]
    pub fn char_position(&self, pos_byte: usize) -> Option<usize> {
        self.b2c.get(pos_byte).copied().filter(|&c| c != usize::MAX)
    }

    /// Gets the position range of the token in characters.
    pub fn range_char(&self, token: &Token) -> Option<Range<usize>> {
        let range = token.range_byte();
        Some(self.char_position(range.start)?..self.char_position(range.end)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        let text = "a北京";
        let t = Token::new(text, Match::new(1, 6, Some(3)));
        assert_eq!(t.offset(), 1);
        assert_eq!(t.surface(), "北京");
        assert_eq!(t.range_byte(), 1..7);
        assert_eq!(t.word_id(), Some(3));
        assert!(!t.is_unknown());
        assert!(Token::new(text, Match::unknown(0, 1)).is_unknown());
    }

    #[test]
    fn test_char_positions() {
        let text = "a北京b";
        let positions = CharPositions::new(text);
        assert_eq!(positions.char_position(0), Some(0));
        assert_eq!(positions.char_position(1), Some(1));
        assert_eq!(positions.char_position(2), None);
        assert_eq!(positions.char_position(4), Some(2));
        assert_eq!(positions.char_position(7), Some(3));
        assert_eq!(positions.char_position(8), Some(4));
        assert_eq!(positions.char_position(9), None);

        let t = Token::new(text, Match::new(1, 6, Some(0)));
        assert_eq!(positions.range_char(&t), Some(1..3));
    }
}
