//! Substring replacement, splitting and joining.

use std::fmt::Display;

use itertools::Itertools;
use smol_str::SmolStr;

/// Replaces every non-overlapping occurrence of `old`, scanning left to right.
///
/// The scan resumes after each inserted `replacement`, so a replacement that
/// contains `old` is never matched again. An empty `old` leaves the text
/// unchanged.
pub fn replace(text: &str, old: &str, replacement: &str) -> String {
    if old.is_empty() {
        return text.to_owned();
    }

    text.replace(old, replacement)
}

/// Splits `text` on every occurrence of `separator`.
///
/// The piece after the last match is always emitted, even when empty, so the
/// result has exactly one more element than there are matches. An empty
/// separator never matches.
///
/// ```
/// let parts = textops::split("a,,b", ",");
/// assert_eq!(parts.iter().map(|p| p.as_str()).collect::<Vec<_>>(), ["a", "", "b"]);
/// ```
pub fn split(text: &str, separator: &str) -> Vec<SmolStr> {
    if separator.is_empty() {
        return vec![SmolStr::new(text)];
    }

    text.split(separator).map(SmolStr::new).collect()
}

/// Concatenates `parts`, putting `separator` between neighbours only.
pub fn join<I>(separator: &str, parts: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    parts.into_iter().join(separator)
}
