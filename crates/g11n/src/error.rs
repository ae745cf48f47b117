//! Error types for translation lookup.

use thiserror::Error;

/// An error raised synchronously by [`translate`](crate::Registry::translate)
/// and [`localize`](crate::Registry::localize).
///
/// Missing translations are not errors: they resolve to a literal
/// `"missing translation: <path>"` marker (or the caller's fallback) so a
/// gap in translation data never takes down the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The key was the empty string or an empty segment array.
    #[error("invalid argument: key must be a non-empty string or segment array")]
    InvalidKey,
}
