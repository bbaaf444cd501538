pub trait FromU32 {
    fn from_u32(src: u32) -> Self;
}

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl FromU32 for usize {
    #[inline(always)]
    fn from_u32(src: u32) -> Self {
        // Since the pointer width is guaranteed to be 32 or 64,
        // the following process always succeeds.
        unsafe { Self::try_from(src).unwrap_unchecked() }
    }
}

#[inline(always)]
pub const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Returns the first code-point start after `pos`, never exceeding `end`.
///
/// An ASCII byte is one code point; otherwise the leading byte is followed by
/// every continuation byte.
#[inline(always)]
pub fn next_boundary(bytes: &[u8], pos: usize, end: usize) -> usize {
    let mut pos = pos + 1;
    while pos < end && is_continuation(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Returns the start of the code point that ends at `end`.
#[inline(always)]
pub fn prev_boundary(bytes: &[u8], end: usize) -> usize {
    debug_assert!(end > 0);
    let mut pos = end - 1;
    while pos > 0 && is_continuation(bytes[pos]) {
        pos -= 1;
    }
    pos
}

/// Whitespace in the C locale, which also includes the vertical tab.
#[inline(always)]
pub const fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Checks if the bytes form exactly one atomic unit:
/// a maximal ASCII alphanumeric run, a maximal ASCII whitespace run,
/// a single non-ASCII code point, or a single other ASCII byte.
pub fn is_atomic_unit(bytes: &[u8]) -> bool {
    let Some(&head) = bytes.first() else {
        return false;
    };
    let consumed = if head.is_ascii_alphanumeric() {
        bytes.iter().take_while(|b| b.is_ascii_alphanumeric()).count()
    } else if is_ascii_space(head) {
        bytes.iter().take_while(|&&b| is_ascii_space(b)).count()
    } else if head.is_ascii() {
        1
    } else {
        next_boundary(bytes, 0, bytes.len())
    };
    consumed == bytes.len()
}
