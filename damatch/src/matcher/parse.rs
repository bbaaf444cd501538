use crate::dictionary::automaton::{PrefixMatch, PrefixMatcher};
use crate::token::Match;
use crate::utils::next_boundary;

/// Reports every occurrence of dictionary words, starting at every code-point boundary.
///
/// At most `capacity` matches are reported per position. No unknown spans are produced.
pub fn parse_matches<M>(
    matcher: &M,
    text: &str,
    capacity: usize,
    prefixes: &mut Vec<PrefixMatch>,
    out: &mut Vec<Match>,
) where
    M: PrefixMatcher + ?Sized,
{
    out.clear();
    let bytes = text.as_bytes();
    let mut bpos = 0;
    while bpos < bytes.len() {
        prefixes.clear();
        matcher.common_prefix_matches(&text[bpos..], capacity, prefixes);
        out.extend(
            prefixes
                .iter()
                .map(|p| Match::new(bpos, p.len, Some(p.word_id))),
        );
        bpos = next_boundary(bytes, bpos, bytes.len());
    }
}
