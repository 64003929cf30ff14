//! Indonesian text preprocessing for content-based recommendation.
//!
//! This crate reduces free text (book titles, synopses) to an ordered
//! lemma sequence that downstream weighting can treat as a bag of terms.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC, configurable)
//! - Locale-free lowercasing
//! - Non-word characters become token boundaries
//! - Short-token and stopword filtering (fixed Indonesian stopword set)
//! - Affix stripping over a fixed, ordered rule table
//!
//! ## Pure function guarantee
//!
//! No I/O, no clocks, no OS/locale dependence. Same text and config,
//! same lemma sequence, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Output order follows input order; nothing downstream depends on
//!   order, but determinism does.
//! - Filters run before affix stripping, so an emitted lemma may be
//!   shorter than `min_token_chars` or equal to a stopword.
//! - Empty input is valid and yields an empty sequence.

mod config;
mod error;
mod lemma;
mod pipeline;
mod stopwords;

pub use crate::config::PreprocessConfig;
pub use crate::error::PreprocessError;
pub use crate::lemma::lemmatize;
pub use crate::pipeline::preprocess;
pub use crate::stopwords::is_stopword;
