use std::iter::Peekable;

use bincode::{
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};
use hashbrown::HashMap;

use super::{PrefixMatch, PrefixMatcher};
use crate::dictionary::WordId;
use crate::errors::{DamatchError, Result};
use crate::utils::FromU32;

/// Character crawdad reserves as the end marker of keys.
const END_MARKER: char = '\0';

/// Double-array trie over the bulk-loaded words, plus a hash overlay
/// holding the words inserted afterwards.
///
/// A key is stored in exactly one of the two parts.
/// Keys containing [`END_MARKER`] always go to the overlay.
#[derive(Default)]
pub struct DoubleArray {
    da: Option<crawdad::Trie>,
    num_static: usize,
    overlay: HashMap<String, WordId>,
    overlay_max_len: usize,
}

impl Encode for DoubleArray {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        let da = self.da.as_ref().map(|da| da.serialize_to_vec());
        Encode::encode(&da, encoder)?;
        Encode::encode(&self.num_static, encoder)?;
        let mut overlay: Vec<_> = self
            .overlay
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        overlay.sort_unstable_by_key(|&(_, v)| v);
        Encode::encode(&overlay, encoder)?;
        Ok(())
    }
}

impl Decode for DoubleArray {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
        let data: Option<Vec<u8>> = Decode::decode(decoder)?;
        let da = data.map(|data| deserialize_trie(&data)).transpose()?;
        let num_static = Decode::decode(decoder)?;
        let records: Vec<(String, WordId)> = Decode::decode(decoder)?;
        let overlay_max_len = records.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        Ok(Self {
            da,
            num_static,
            overlay: records.into_iter().collect(),
            overlay_max_len,
        })
    }
}

bincode::impl_borrow_decode!(DoubleArray);

/// Gets the byte length of the trie image at the head of `data`,
/// or `None` if `data` is too short for the lengths it declares.
fn trie_image_len(data: &[u8]) -> Option<usize> {
    let read_u32 = |pos: usize| -> Option<usize> {
        let bytes = data.get(pos..pos.checked_add(4)?)?;
        Some(usize::from_u32(u32::from_le_bytes(bytes.try_into().ok()?)))
    };
    // Code mapper table, then its alphabet size.
    let mut pos = read_u32(0)?.checked_mul(4)?.checked_add(4)?;
    read_u32(pos)?;
    pos += 4;
    // Nodes: count and 8 bytes each.
    let num_nodes = read_u32(pos)?;
    let len = num_nodes.checked_mul(8)?.checked_add(pos + 4)?;
    (len <= data.len()).then_some(len)
}

fn deserialize_trie(data: &[u8]) -> Result<crawdad::Trie, DecodeError> {
    match trie_image_len(data) {
        Some(len) if len == data.len() => Ok(crawdad::Trie::deserialize_from_slice(data).0),
        _ => Err(DecodeError::OtherString(format!(
            "broken trie image of {} bytes",
            data.len()
        ))),
    }
}

impl DoubleArray {
    /// Builds the trie from sorted, unique, non-empty keys.
    ///
    /// Keys containing [`END_MARKER`] are stored in the overlay.
    pub fn from_records<K>(records: &[(K, WordId)]) -> Result<Self>
    where
        K: AsRef<str>,
    {
        let (marked, unmarked): (Vec<_>, Vec<_>) = records
            .iter()
            .map(|(k, v)| (k.as_ref(), *v))
            .partition(|(k, _)| k.contains(END_MARKER));
        let da = if unmarked.is_empty() {
            None
        } else {
            let da = crawdad::Trie::from_records(unmarked.iter().copied())
                .map_err(|e| DamatchError::invalid_argument("records", e.to_string()))?;
            Some(da)
        };
        let overlay_max_len = marked.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        Ok(Self {
            da,
            num_static: unmarked.len(),
            overlay: marked.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            overlay_max_len,
        })
    }

    /// Matches from the double-array part, with lengths converted into bytes.
    ///
    /// The search stops before [`END_MARKER`], which no trie key contains.
    fn trie_matches<'a>(&'a self, haystack: &'a str) -> impl Iterator<Item = PrefixMatch> + 'a {
        let haystack = haystack
            .find(END_MARKER)
            .map_or(haystack, |end| &haystack[..end]);
        let mut ends = haystack.char_indices().map(|(i, c)| i + c.len_utf8());
        let mut num_chars = 0;
        let mut len = 0;
        self.da
            .iter()
            .flat_map(move |da| da.common_prefix_search(haystack.chars()))
            .map(move |(word_id, end_char)| {
                while num_chars < end_char {
                    match ends.next() {
                        Some(end) => len = end,
                        None => break,
                    }
                    num_chars += 1;
                }
                PrefixMatch::new(word_id, len)
            })
    }

    fn overlay_matches<'a>(&'a self, haystack: &'a str) -> impl Iterator<Item = PrefixMatch> + 'a {
        haystack
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take_while(move |&end| end <= self.overlay_max_len)
            .filter_map(move |end| {
                self.overlay
                    .get(&haystack[..end])
                    .map(|&word_id| PrefixMatch::new(word_id, end))
            })
    }
}

fn merge_by_len<L, R>(
    mut lhs: Peekable<L>,
    mut rhs: Peekable<R>,
    capacity: usize,
    out: &mut Vec<PrefixMatch>,
) where
    L: Iterator<Item = PrefixMatch>,
    R: Iterator<Item = PrefixMatch>,
{
    for _ in 0..capacity {
        let from_rhs = match (lhs.peek(), rhs.peek()) {
            (Some(l), Some(r)) => r.len < l.len,
            (Some(_), None) => false,
            (None, _) => true,
        };
        let m = if from_rhs { rhs.next() } else { lhs.next() };
        match m {
            Some(m) => out.push(m),
            None => break,
        }
    }
}

impl PrefixMatcher for DoubleArray {
    fn exact_match(&self, key: &str) -> Option<WordId> {
        if let Some(&word_id) = self.overlay.get(key) {
            return Some(word_id);
        }
        if key.contains(END_MARKER) {
            return None;
        }
        self.da.as_ref().and_then(|da| da.exact_match(key.chars()))
    }

    fn common_prefix_matches(&self, haystack: &str, capacity: usize, out: &mut Vec<PrefixMatch>) {
        merge_by_len(
            self.trie_matches(haystack).peekable(),
            self.overlay_matches(haystack).peekable(),
            capacity,
            out,
        );
    }

    fn update(&mut self, key: &str, word_id: WordId) -> Result<()> {
        if key.is_empty() {
            return Err(DamatchError::invalid_argument(
                "key",
                "an empty key can not be stored.",
            ));
        }
        match self.exact_match(key) {
            Some(id) if id == word_id => Ok(()),
            Some(id) => Err(DamatchError::invalid_argument(
                "key",
                format!("{key} is already mapped to {id}."),
            )),
            None => {
                self.overlay.insert(key.to_string(), word_id);
                self.overlay_max_len = self.overlay_max_len.max(key.len());
                Ok(())
            }
        }
    }

    fn num_keys(&self) -> usize {
        self.num_static + self.overlay.len()
    }
}
