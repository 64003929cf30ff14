//! Request, response, and error types for the recommendation engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use corpus::{Book, CorpusError, ExcludedBook};
use preprocess::PreprocessError;
use vectorize::VectorizeError;

/// How the target book is located in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSelector {
    /// Exact, case-sensitive id match.
    Id(String),
    /// Case-insensitive title substring; the first corpus match wins.
    Title(String),
}

impl fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSelector::Id(id) => write!(f, "id \"{id}\""),
            TargetSelector::Title(fragment) => write!(f, "title \"{fragment}\""),
        }
    }
}

/// A single recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub selector: TargetSelector,
    /// Result cap for this request; falls back to the engine config
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
}

impl RecommendRequest {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            selector: TargetSelector::Id(id.into()),
            top_n: None,
        }
    }

    pub fn by_title(fragment: impl Into<String>) -> Self {
        Self {
            selector: TargetSelector::Title(fragment.into()),
            top_n: None,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn validate(&self) -> Result<(), RecommendError> {
        let text = match &self.selector {
            TargetSelector::Id(id) => id,
            TargetSelector::Title(fragment) => fragment,
        };
        if text.trim().is_empty() {
            return Err(RecommendError::InvalidRequest(
                "selector text is empty".to_string(),
            ));
        }
        if self.top_n == Some(0) {
            return Err(RecommendError::InvalidRequest(
                "top_n must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Engine-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Default result cap when the request does not supply one.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    5
}

impl RecommendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn validate(&self) -> Result<(), RecommendError> {
        if self.version == 0 {
            return Err(RecommendError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        if self.top_n == 0 {
            return Err(RecommendError::InvalidConfig(
                "top_n must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            version: 1,
            top_n: default_top_n(),
        }
    }
}

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub book: Book,
    /// Cosine similarity to the target, in `[0, 1]` for these
    /// non-negative vectors.
    pub score: f32,
}

/// The result of one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// The resolved target book.
    pub target: Book,
    /// Ranked hits, best first; the target itself never appears.
    pub recommendations: Vec<Recommendation>,
    /// Fingerprint of the snapshot the ranking ran against.
    pub fingerprint: String,
    /// Books the corpus stage rejected, surfaced for reporting.
    pub excluded: Vec<ExcludedBook>,
}

/// Errors surfaced by the recommendation engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Vectorize(#[from] VectorizeError),

    /// The selector matched no book in the snapshot.
    #[error("target not found: no book matches {selector}")]
    TargetNotFound { selector: TargetSelector },

    #[error("invalid recommend config: {0}")]
    InvalidConfig(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
