//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `#[from]` or keep it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `sf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `sf-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
