//! ASCII case mapping.
//!
//! Only `a-z` and `A-Z` change case; every other character, including
//! non-ASCII letters, passes through untouched.

/// ASCII lower case.
#[inline(always)]
pub fn lower_case(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// ASCII upper case.
#[inline(always)]
pub fn upper_case(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Upper-cases the first character and lower-cases all the rest.
///
/// This is whole-string capitalization, not title case: `"hELLO wORLD"`
/// becomes `"Hello world"`.
pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => {
            let mut out = String::with_capacity(s.len());
            out.push(f.to_ascii_uppercase());
            out.push_str(&lower_case(c.as_str()));
            out
        }
    }
}
