//! Padding to a minimum width.
//!
//! Widths are signed and counted in characters. A width at or below the
//! current length, negative widths included, leaves the text as it is: these
//! functions never truncate and never fail.

use std::iter;

use crate::slice::char_len;

/// Number of fill characters needed to reach `width`, or `None` if the text
/// is already wide enough.
#[inline(always)]
fn padding(text: &str, width: isize) -> Option<usize> {
    let width = usize::try_from(width).ok()?;
    width.checked_sub(char_len(text)).filter(|&n| n > 0)
}

#[inline(always)]
fn push_fill(out: &mut String, fill: char, count: usize) {
    out.extend(iter::repeat(fill).take(count));
}

/// Centers `text` in a field of `width` characters.
///
/// When the padding cannot be split evenly the extra fill character goes on
/// the right:
///
/// ```
/// assert_eq!(textops::center("abc", 6, '*'), "*abc**");
/// ```
pub fn center(text: &str, width: isize, fill: char) -> String {
    let extra = match padding(text, width) {
        Some(n) => n,
        None => return text.to_owned(),
    };

    let left = extra / 2;
    let right = extra - left;

    let mut out = String::with_capacity(text.len() + extra * fill.len_utf8());
    push_fill(&mut out, fill, left);
    out.push_str(text);
    push_fill(&mut out, fill, right);
    out
}

/// Left-justifies `text`, padding on the right.
pub fn ljust(text: &str, width: isize, fill: char) -> String {
    let extra = match padding(text, width) {
        Some(n) => n,
        None => return text.to_owned(),
    };

    let mut out = String::with_capacity(text.len() + extra * fill.len_utf8());
    out.push_str(text);
    push_fill(&mut out, fill, extra);
    out
}

/// Right-justifies `text`, padding on the left.
pub fn rjust(text: &str, width: isize, fill: char) -> String {
    let extra = match padding(text, width) {
        Some(n) => n,
        None => return text.to_owned(),
    };

    let mut out = String::with_capacity(text.len() + extra * fill.len_utf8());
    push_fill(&mut out, fill, extra);
    out.push_str(text);
    out
}
