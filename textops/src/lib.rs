/*! Pure string transformation utilities.

A flat catalog of stateless functions over `&str`: slicing with signed,
saturating bounds, ASCII case conversion, whitespace stripping, padding,
replacement, splitting and joining, tab expansion, and Levenshtein edit
distance.

Every function returns a freshly allocated value and never touches state
outside its arguments, so all of them can be called from any number of
threads at once. Lengths, indices and widths count `char`s. Case mapping and
the whitespace set are ASCII only.

# Usage examples

```
use textops::{TextOps, DEFAULT_FILL};

assert_eq!(textops::slice("hello", 1, -1), "ell");
assert_eq!("hELLO".capitalize(), "Hello");
assert_eq!("ab".center(6, '*'), "**ab**");
assert_eq!("ab".rjust(4, DEFAULT_FILL), "  ab");
assert_eq!(textops::join(",", textops::split("a,,b", ",")), "a,,b");
assert_eq!("kitten".edit_distance("sitting", false), 3);
```

The only operation that can fail is [`expand_tabs`], which rejects tab sizes
below one with [`TextError::InvalidTabSize`].
*/

#![warn(missing_docs)]
pub mod case_handling;
pub mod distance;
pub mod error;
pub mod justify;
pub mod slice;
pub mod split;
pub mod strip;
pub mod tabs;

pub(crate) mod constants;


pub use crate::case_handling::{capitalize, lower_case, upper_case};
pub use crate::constants::{DEFAULT_FILL, WHITESPACE};
pub use crate::distance::edit_distance;
pub use crate::error::{Result, TextError};
pub use crate::justify::{center, ljust, rjust};
pub use crate::slice::{normalize_range, slice, NormalizedRange};
pub use crate::split::{join, replace, split};
pub use crate::strip::{is_strip_whitespace, lstrip, rstrip, strip};
pub use crate::tabs::expand_tabs;

/// Method-call access to the catalog.
///
/// `replace`, `split` and `join` are left out because `str` already has
/// inherent methods by those names; call the free functions instead.
pub trait TextOps {
    /// See [`slice()`].
    fn slice(&self, start: isize, end: isize) -> String;
    /// See [`capitalize()`].
    fn capitalize(&self) -> String;
    /// See [`upper_case()`].
    fn upper(&self) -> String;
    /// See [`lower_case()`].
    fn lower(&self) -> String;
    /// See [`lstrip()`].
    fn lstrip(&self) -> String;
    /// See [`rstrip()`].
    fn rstrip(&self) -> String;
    /// See [`strip()`].
    fn strip(&self) -> String;
    /// See [`center()`].
    fn center(&self, width: isize, fill: char) -> String;
    /// See [`ljust()`].
    fn ljust(&self, width: isize, fill: char) -> String;
    /// See [`rjust()`].
    fn rjust(&self, width: isize, fill: char) -> String;
    /// See [`expand_tabs()`].
    fn expand_tabs(&self, tabsize: isize) -> Result<String>;
    /// See [`edit_distance()`].
    fn edit_distance(&self, other: &str, ignore_case: bool) -> usize;
}

impl TextOps for str {
    #[inline]
    fn slice(&self, start: isize, end: isize) -> String {
        slice::slice(self, start, end)
    }

    #[inline]
    fn capitalize(&self) -> String {
        case_handling::capitalize(self)
    }

    #[inline]
    fn upper(&self) -> String {
        case_handling::upper_case(self)
    }

    #[inline]
    fn lower(&self) -> String {
        case_handling::lower_case(self)
    }

    #[inline]
    fn lstrip(&self) -> String {
        strip::lstrip(self)
    }

    #[inline]
    fn rstrip(&self) -> String {
        strip::rstrip(self)
    }

    #[inline]
    fn strip(&self) -> String {
        strip::strip(self)
    }

    #[inline]
    fn center(&self, width: isize, fill: char) -> String {
        justify::center(self, width, fill)
    }

    #[inline]
    fn ljust(&self, width: isize, fill: char) -> String {
        justify::ljust(self, width, fill)
    }

    #[inline]
    fn rjust(&self, width: isize, fill: char) -> String {
        justify::rjust(self, width, fill)
    }

    #[inline]
    fn expand_tabs(&self, tabsize: isize) -> Result<String> {
        tabs::expand_tabs(self, tabsize)
    }

    #[inline]
    fn edit_distance(&self, other: &str, ignore_case: bool) -> usize {
        distance::edit_distance(self, other, ignore_case)
    }
}
