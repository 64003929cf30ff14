//! Book records and the validated corpus snapshot.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw book as supplied by the caller.
///
/// `genres` is a single comma-separated label string; it is parsed
/// into individual labels during snapshot construction. `attributes`
/// carries arbitrary caller metadata through the pipeline untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genres: impl Into<String>,
        synopsis: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genres: genres.into(),
            synopsis: synopsis.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// One validated book inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub book: Book,
    /// Parsed, case-folded genre labels in their original order.
    /// Empty only when the zero-fill policy admitted a book without
    /// genres.
    pub genre_labels: Vec<String>,
}

/// Why a book was left out of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    EmptyId,
    EmptyTitle,
    MissingGenres,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MalformedReason::EmptyId => "empty id",
            MalformedReason::EmptyTitle => "empty title",
            MalformedReason::MissingGenres => "missing genres",
        };
        f.write_str(label)
    }
}

/// A book rejected during snapshot construction, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedBook {
    /// Position of the book in the caller's input slice. Identifies
    /// books whose id itself was blank.
    pub index: usize,
    pub id: String,
    pub title: String,
    pub reason: MalformedReason,
}

/// A validated, fingerprinted view of one corpus.
///
/// Entry order matches the caller's input order with excluded books
/// removed; downstream ranking relies on that order for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    pub entries: Vec<SnapshotEntry>,
    pub excluded: Vec<ExcludedBook>,
    /// Hex SHA-256 over the recommendation-relevant book fields and the
    /// config version. Equal fingerprints mean equal recommendations.
    pub fingerprint: String,
    pub config_version: u32,
}

impl CorpusSnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
