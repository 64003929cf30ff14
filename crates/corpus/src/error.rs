//! Corpus-level errors.

use thiserror::Error;

/// Errors produced while building a corpus snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// No usable books remain. `supplied` counts the caller's input,
    /// `excluded` how many of those were rejected as malformed; the
    /// two differ only when the input was non-empty to begin with.
    #[error("corpus is empty: {supplied} books supplied, {excluded} excluded as malformed")]
    EmptyCorpus { supplied: usize, excluded: usize },

    /// The snapshot configuration failed validation.
    #[error("invalid corpus config: {0}")]
    InvalidConfig(String),
}
