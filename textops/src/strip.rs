//! Stripping of ASCII whitespace from either end.

use crate::constants::WHITESPACE;

/// Whether `c` belongs to the set the strip family removes.
#[inline(always)]
pub fn is_strip_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Removes leading space, tab, `\n` and `\r`.
pub fn lstrip(s: &str) -> String {
    s.trim_start_matches(is_strip_whitespace).to_owned()
}

/// Removes trailing space, tab, `\n` and `\r`.
pub fn rstrip(s: &str) -> String {
    s.trim_end_matches(is_strip_whitespace).to_owned()
}

/// Strips both ends; always equal to `lstrip(&rstrip(s))`.
pub fn strip(s: &str) -> String {
    lstrip(&rstrip(s))
}
