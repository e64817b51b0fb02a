//! Errors raised by the few operations that reject their arguments.
use thiserror::Error;

/// Invalid-argument signal. Everything not listed here is total.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// `expand_tabs` needs a strictly positive tab size.
    #[error("tab size must be positive, got {0}")]
    InvalidTabSize(isize),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TextError>;
