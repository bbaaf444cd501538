use crate::dictionary::automaton::{PrefixMatch, PrefixMatcher};
use crate::token::Match;
use crate::utils::next_boundary;

/// Whether the scanner is inside a dictionary word or an unknown run.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum State {
    InVocab,
    Oov,
}

/// Greedy left-to-right maximal matching.
///
/// At each position the longest of the first `capacity` prefix matches is taken.
/// Positions without any match are skipped one code point at a time,
/// and consecutive skipped code points form a single unknown span.
pub fn forward_matches<M>(
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
    let mut state = State::InVocab;
    let mut oov_start = 0;
    let mut bpos = 0;

    while bpos < bytes.len() {
        prefixes.clear();
        matcher.common_prefix_matches(&text[bpos..], capacity, prefixes);
        if let Some(&longest) = prefixes.last() {
            if state == State::Oov {
                out.push(Match::unknown(oov_start, bpos - oov_start));
            }
            out.push(Match::new(bpos, longest.len, Some(longest.word_id)));
            bpos += longest.len;
            state = State::InVocab;
        } else {
            if state == State::InVocab {
                oov_start = bpos;
            }
            bpos = next_boundary(bytes, bpos, bytes.len());
            state = State::Oov;
        }
    }

    if state == State::Oov {
        out.push(Match::unknown(oov_start, bpos - oov_start));
    }
}
