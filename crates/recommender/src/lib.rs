//! Content-based book recommendation engine.
//!
//! Given a corpus of books and a target selector, the engine:
//!
//! 1. builds a validated corpus snapshot (delegated to the corpus
//!    crate, including the malformed-book policy)
//! 2. preprocesses every title and synopsis into lemma tokens
//! 3. vectorizes the corpus into namespaced TF-IDF plus multi-hot
//!    genre features
//! 4. scores every other book against the target with cosine
//!    similarity, sorts best first with ties keeping corpus order, and
//!    truncates to the requested cap
//!
//! Everything is deterministic: the same books, configs, and request
//! always produce the same response.

pub mod engine;
pub mod similarity;
pub mod types;

pub use engine::Recommender;
pub use similarity::cosine_similarity;
pub use types::{
    RecommendConfig, RecommendError, RecommendRequest, RecommendResponse, Recommendation,
    TargetSelector,
};
