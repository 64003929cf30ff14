//! Error types for the preprocessing pipeline.

use thiserror::Error;

/// Errors returned by [`preprocess`](crate::preprocess).
///
/// Preprocessing itself is total: empty strings, punctuation-only input,
/// and unknown words are all valid and produce a (possibly empty) lemma
/// sequence. The only failure mode is a configuration that cannot be
/// interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreprocessError {
    /// The supplied [`PreprocessConfig`](crate::PreprocessConfig) is
    /// invalid, e.g. a reserved version number or a zero minimum token
    /// length.
    #[error("invalid preprocess config: {0}")]
    InvalidConfig(String),
}
