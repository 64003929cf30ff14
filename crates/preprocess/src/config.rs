//! Configuration types for the preprocessing pipeline.
//!
//! This module defines [`PreprocessConfig`], which controls how free text
//! is reduced to a lemma sequence.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any edit that can alter
//! the emitted lemma sequence for some input (rule changes, stopword list
//! edits, filter changes, even bug fixes) must bump it, so corpora
//! processed under different behavior remain distinguishable.

use serde::{Deserialize, Serialize};

use crate::error::PreprocessError;

/// Configuration for the preprocessing pipeline.
///
/// Cheap to clone and serializable for configuration management. The
/// defaults encode the standard pipeline; the toggles exist for
/// diagnostics and for callers that feed pre-filtered text.
///
/// # Examples
///
/// ```rust
/// use preprocess::PreprocessConfig;
///
/// let config = PreprocessConfig::default();
/// assert_eq!(config.version, 1);
/// assert_eq!(config.min_token_chars, 3);
/// assert!(config.filter_stopwords);
/// assert!(config.lemmatize);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Semantic version of the preprocessing behavior.
    ///
    /// Must be >= 1; version 0 is reserved and rejected.
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before any other step.
    ///
    /// NFKC folds compatibility characters (fullwidth forms, ligatures)
    /// and composes accented characters, so visually equivalent inputs
    /// produce identical lemma sequences. For plain ASCII text this is a
    /// no-op. Default `true`.
    pub normalize_unicode: bool,

    /// Minimum length, in characters, a token must have to survive
    /// filtering.
    ///
    /// The default of 3 drops one- and two-character tokens, which in
    /// Indonesian are almost exclusively particles and clitics. Must be
    /// >= 1. Filtering happens before affix stripping, so emitted lemmas
    /// may be shorter than this.
    pub min_token_chars: usize,

    /// If true, drop tokens found in the fixed Indonesian stopword set.
    ///
    /// Default `true`. See [`is_stopword`](crate::is_stopword).
    pub filter_stopwords: bool,

    /// If true, reduce each surviving token via the ordered affix rule
    /// table.
    ///
    /// Default `true`. See [`lemmatize`](crate::lemmatize).
    pub lemmatize: bool,
}

impl PreprocessConfig {
    /// Create a configuration with the default pipeline behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PreprocessError> {
        if self.version == 0 {
            return Err(PreprocessError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.min_token_chars == 0 {
            return Err(PreprocessError::InvalidConfig(
                "min_token_chars must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            min_token_chars: 3,
            filter_stopwords: true,
            lemmatize: true,
        }
    }
}
