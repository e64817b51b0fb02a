//! Levenshtein edit distance.
//!
//! The classic Wagner–Fischer table is filled row by row, where
//!
//! ```text
//! dp[i][0] = i
//! dp[0][j] = j
//! dp[i][j] = min(dp[i-1][j] + 1,          deletion
//!                dp[i][j-1] + 1,          insertion
//!                dp[i-1][j-1] + cost)     substitution, cost 0 on a match
//! ```
//!
//! Each row only reads the row above it, so just two rows are kept alive.
//! They are sized by the shorter input.

#[inline(always)]
fn chars_match(a: char, b: char, ignore_case: bool) -> bool {
    if ignore_case {
        a.eq_ignore_ascii_case(&b)
    } else {
        a == b
    }
}

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `left` into `right`.
///
/// With `ignore_case`, ASCII letters that differ only in case count as equal.
/// That is the only effect of the flag.
///
/// ```
/// use textops::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting", false), 3);
/// assert_eq!(edit_distance("ABC", "abc", true), 0);
/// ```
pub fn edit_distance(left: &str, right: &str, ignore_case: bool) -> usize {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();

    // The distance is symmetric, so the shorter input can always be the row.
    let (outer, inner) = if left.len() >= right.len() {
        (&left, &right)
    } else {
        (&right, &left)
    };

    if inner.is_empty() {
        return outer.len();
    }

    log::trace!(
        "edit_distance: {}x{} table, ignore_case: {}",
        outer.len() + 1,
        inner.len() + 1,
        ignore_case
    );

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr = vec![0usize; inner.len() + 1];

    for (i, &a) in outer.iter().enumerate() {
        curr[0] = i + 1;

        for (j, &b) in inner.iter().enumerate() {
            let cost = usize::from(!chars_match(a, b, ignore_case));
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
