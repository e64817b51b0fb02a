//! Tab expansion.

use crate::error::{Result, TextError};

/// Replaces each tab with spaces up to the next multiple of `tabsize`.
///
/// Tab stops are measured against the total output length so far, which is
/// not reset by newlines. A `tabsize` of zero or below is rejected.
///
/// ```
/// assert_eq!(textops::expand_tabs("a\tb", 4).unwrap(), "a   b");
/// ```
pub fn expand_tabs(text: &str, tabsize: isize) -> Result<String> {
    let tabsize = match usize::try_from(tabsize) {
        Ok(n) if n > 0 => n,
        _ => {
            log::debug!("expand_tabs: rejecting tab size {}", tabsize);
            return Err(TextError::InvalidTabSize(tabsize));
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;

    for ch in text.chars() {
        if ch == '\t' {
            let spaces = tabsize - column % tabsize;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(ch);
            column += 1;
        }
    }

    Ok(out)
}
