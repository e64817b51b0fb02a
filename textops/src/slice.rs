//! Python-style slicing with signed, saturating bounds.
//!
//! Bounds are normalized against the character length of the text in a fixed
//! order:
//!
//! 1. a negative `start` counts from the end,
//! 2. an `end` of zero or below counts from the end,
//! 3. `start` is clamped up to 0,
//! 4. `end` is clamped down to the length,
//! 5. anything that is not `start < end` is the empty range.
//!
//! Note the asymmetry in step 2: `slice(s, 0, 0)` is the whole of `s`, not the
//! empty string. Reordering the steps changes results for inputs such as
//! `start < -len`, so they must stay as written.

/// A canonical half-open range `[start, end)` into a text of known length.
///
/// Always satisfies `start <= end <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedRange {
    /// first character included
    pub start: usize,
    /// first character excluded
    pub end: usize,
}

impl NormalizedRange {
    /// number of characters covered
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// whether the range selects nothing
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Length of `text` in characters, the unit every length-sensitive operation counts in.
#[inline(always)]
pub(crate) fn char_len(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

/// Maps a signed `(start, end)` pair onto the canonical range it selects in a
/// text of `len` characters. Never fails; inverted or out-of-range pairs give
/// an empty range.
pub fn normalize_range(len: usize, start: isize, end: isize) -> NormalizedRange {
    // A str never exceeds isize::MAX bytes, so this only saturates for synthetic lengths.
    let len = isize::try_from(len).unwrap_or(isize::MAX);

    let mut start = start;
    let mut end = end;

    if start < 0 {
        start = start.saturating_add(len);
    }
    if end <= 0 {
        end = end.saturating_add(len);
    }
    if start < 0 {
        start = 0;
    }
    if end > len {
        end = len;
    }

    if start < end {
        NormalizedRange {
            start: start as usize,
            end: end as usize,
        }
    } else {
        let at = start.min(len) as usize;
        NormalizedRange { start: at, end: at }
    }
}

/// Returns the characters of `text` in `[start, end)` after normalizing the
/// bounds as described in the module docs.
///
/// ```
/// assert_eq!(textops::slice("hello", 1, -1), "ell");
/// assert_eq!(textops::slice("hello", -3, 5), "llo");
/// assert_eq!(textops::slice("hello", 4, 2), "");
/// ```
pub fn slice(text: &str, start: isize, end: isize) -> String {
    let range = normalize_range(char_len(text), start, end);

    if range.is_empty() {
        return String::new();
    }

    if text.is_ascii() {
        return text[range.start..range.end].to_owned();
    }

    text.chars().skip(range.start).take(range.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_start_counts_from_end() {
        assert_eq!(slice("hello", -2, 5), "lo");
        assert_eq!(slice("hello", -5, 5), "hello");
        assert_eq!(slice("hello", -1, 5), "o");
    }

    #[test]
    fn start_before_beginning_saturates() {
        assert_eq!(slice("hello", -100, 2), "he");
        assert_eq!(slice("hello", isize::MIN, 3), "hel");
    }

    #[test]
    fn zero_end_means_whole_length() {
        assert_eq!(slice("hello", 0, 0), "hello");
        assert_eq!(slice("hello", 2, 0), "llo");
        assert_eq!(slice("hello", 1, -1), "ell");
    }

    #[test]
    fn end_past_length_saturates() {
        assert_eq!(slice("hello", 1, 100), "ello");
        assert_eq!(slice("hello", 0, isize::MAX), "hello");
    }

    #[test]
    fn inverted_and_empty_ranges() {
        assert_eq!(slice("hello", 3, 3), "");
        assert_eq!(slice("hello", 4, 2), "");
        assert_eq!(slice("hello", 10, 20), "");
        assert_eq!(slice("hello", 0, -100), "");
        assert_eq!(slice("", 0, 0), "");
        assert_eq!(slice("", -3, 3), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(slice("Vássján", 1, 3), "ás");
        assert_eq!(slice("Vássján", -3, 7), "ján");
        assert_eq!(slice("😄ab😄", 1, -1), "ab");
    }

    #[test]
    fn normalized_ranges() {
        assert_eq!(
            normalize_range(5, 1, -1),
            NormalizedRange { start: 1, end: 4 }
        );
        assert_eq!(
            normalize_range(5, -100, 100),
            NormalizedRange { start: 0, end: 5 }
        );

        let inverted = normalize_range(5, 4, 2);
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);

        let beyond = normalize_range(5, 10, 20);
        assert_eq!(beyond, NormalizedRange { start: 5, end: 5 });
    }

    #[test]
    fn clamping_order_matters() {
        // end is adjusted from its own sign before start is clamped, so a
        // hugely negative start still pairs with an end counted from the back
        assert_eq!(
            normalize_range(4, -10, -1),
            NormalizedRange { start: 0, end: 3 }
        );
        // end of -len lands on 0 and stays there
        assert!(normalize_range(4, -10, -4).is_empty());
    }
}
