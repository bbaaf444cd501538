use crate::dictionary::automaton::PrefixMatcher;
use crate::token::Match;
use crate::utils::{is_atomic_unit, next_boundary, prev_boundary};

/// Gets the start of the look-back window ending at `epos`.
///
/// The window covers at most `max_word_len` bytes, starting at a code-point boundary,
/// and always keeps at least the last code point.
fn window_start(bytes: &[u8], epos: usize, max_word_len: usize) -> usize {
    if epos <= max_word_len {
        return 0;
    }
    let bpos = next_boundary(bytes, epos - max_word_len - 1, epos);
    if bpos < epos {
        bpos
    } else {
        prev_boundary(bytes, epos)
    }
}

/// Right-to-left matching with a bounded look-back window.
///
/// The window `[bpos, epos)` is tested as a whole. If it is neither a word nor a single
/// atomic unit, it shrinks from the left by one code point and is tested again.
/// This is a heuristic, not the longest match from the right.
///
/// Afterwards, consecutive unknown spans consisting only of ASCII are merged.
/// Unknown spans containing non-ASCII bytes stay as they are.
pub fn backward_matches<M>(matcher: &M, max_word_len: usize, text: &str, out: &mut Vec<Match>)
where
    M: PrefixMatcher + ?Sized,
{
    out.clear();
    let bytes = text.as_bytes();
    let mut rev_matches = vec![];
    let mut epos = bytes.len();
    let mut bpos = window_start(bytes, epos, max_word_len);

    while epos > 0 {
        let window = &text[bpos..epos];
        let word_id = matcher.exact_match(window);
        if word_id.is_some() || is_atomic_unit(window.as_bytes()) {
            rev_matches.push(Match::new(bpos, epos - bpos, word_id));
            epos = bpos;
            bpos = window_start(bytes, epos, max_word_len);
        } else {
            bpos = next_boundary(bytes, bpos, epos);
        }
    }

    let is_ascii_unknown = |m: &Match| m.is_unknown() && bytes[m.range_byte()].is_ascii();

    let mut it = rev_matches.into_iter().rev().peekable();
    while let Some(m) = it.next() {
        if !is_ascii_unknown(&m) {
            out.push(m);
            continue;
        }
        let mut len = m.len;
        while let Some(next) = it.next_if(is_ascii_unknown) {
            len += next.len;
        }
        out.push(Match::unknown(m.start, len));
    }
}
