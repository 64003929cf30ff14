//! Feature key and vector types shared by the vectorizer and its callers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A namespaced feature key.
///
/// Title terms, genre bits, and synopsis terms occupy disjoint key
/// spaces, so the same lemma appearing in a title and a synopsis
/// contributes two independent vector components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureKey {
    /// TF-IDF weight of a title term.
    Title(String),
    /// Multi-hot bit for the genre at this vocabulary index.
    Genre(usize),
    /// TF-IDF weight of a synopsis term.
    Synopsis(String),
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKey::Title(term) => write!(f, "title_{term}"),
            FeatureKey::Genre(index) => write!(f, "genre_{index}"),
            FeatureKey::Synopsis(term) => write!(f, "synopsis_{term}"),
        }
    }
}

/// Sparse weight map for a single text field of one document.
/// Keys are raw terms; namespacing happens when fields are combined.
pub type TermWeights = BTreeMap<String, f32>;

/// Combined sparse feature vector for one book.
///
/// Absent keys are implicitly zero. Every vector built for one corpus
/// draws its keys from the same global per-field vocabularies, so any
/// two of them are directly comparable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    weights: BTreeMap<FeatureKey, f32>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a weight. Zeroes are skipped so that absence stays the
    /// only representation of a zero component.
    pub fn insert(&mut self, key: FeatureKey, weight: f32) {
        if weight != 0.0 {
            self.weights.insert(key, weight);
        }
    }

    /// Weight of `key`, zero when absent.
    pub fn weight(&self, key: &FeatureKey) -> f32 {
        self.weights.get(key).copied().unwrap_or(0.0)
    }

    /// Number of non-zero components.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries in deterministic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, f32)> {
        self.weights.iter().map(|(key, weight)| (key, *weight))
    }

    /// Euclidean magnitude over the non-zero components.
    pub fn magnitude(&self) -> f32 {
        self.weights
            .values()
            .map(|weight| weight * weight)
            .sum::<f32>()
            .sqrt()
    }
}

/// All combined vectors for one corpus, plus provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusVectors {
    /// One combined vector per book, in corpus order.
    pub vectors: Vec<FeatureVector>,
    /// Sorted genre vocabulary defining the `genre_i` indices.
    pub genre_vocabulary: Vec<String>,
    /// Provenance and dimensions of this vectorization run.
    pub meta: VectorizeMeta,
}

/// Metadata describing how a [`CorpusVectors`] was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorizeMeta {
    pub algorithm_name: String,
    pub algorithm_version: u16,
    pub config_version: u32,
    pub document_count: usize,
    pub title_vocabulary_len: usize,
    pub genre_vocabulary_len: usize,
    pub synopsis_vocabulary_len: usize,
    pub use_parallel: bool,
}
