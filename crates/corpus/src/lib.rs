//! Corpus intake for the book recommender.
//!
//! Takes raw [`Book`] records and produces a validated
//! [`CorpusSnapshot`]:
//!
//! - blank-id and blank-title books are always excluded; identity
//!   fields have no zero representation
//! - books without usable genre labels follow the configured
//!   [`MalformedPolicy`], either excluded or kept with an all-zero
//!   genre block
//! - genre strings are parsed into trimmed, case-folded labels
//! - the surviving entries are fingerprinted so callers can tell two
//!   corpora apart without comparing every book
//!
//! Exclusions are reported in the snapshot rather than logged and
//! forgotten; an input that leaves no usable books at all is an error.

pub mod config;
pub mod error;
pub mod genre;
pub mod hash;
pub mod types;

pub use config::{CorpusConfig, MalformedPolicy};
pub use error::CorpusError;
pub use genre::parse_genre_labels;
pub use hash::snapshot_fingerprint;
pub use types::{Book, CorpusSnapshot, ExcludedBook, MalformedReason, SnapshotEntry};

use std::time::Instant;

use tracing::{info, span, warn, Level};

/// Build a validated snapshot from raw books.
///
/// Input order is preserved for the surviving entries. Fails only when
/// the config is invalid or no usable book remains.
pub fn build_snapshot(books: &[Book], cfg: &CorpusConfig) -> Result<CorpusSnapshot, CorpusError> {
    let span = span!(Level::INFO, "corpus.build_snapshot", book_count = books.len());
    let _guard = span.enter();
    let started = Instant::now();

    cfg.validate()?;

    let mut entries: Vec<SnapshotEntry> = Vec::with_capacity(books.len());
    let mut excluded: Vec<ExcludedBook> = Vec::new();

    for (index, book) in books.iter().enumerate() {
        match classify(index, book, cfg.malformed_policy) {
            Ok(entry) => entries.push(entry),
            Err(rejected) => {
                warn!(
                    index = rejected.index,
                    id = %rejected.id,
                    reason = %rejected.reason,
                    "book_excluded"
                );
                excluded.push(rejected);
            }
        }
    }

    if entries.is_empty() {
        warn!(
            supplied = books.len(),
            excluded = excluded.len(),
            elapsed_micros = started.elapsed().as_micros() as u64,
            "snapshot_failure"
        );
        return Err(CorpusError::EmptyCorpus {
            supplied: books.len(),
            excluded: excluded.len(),
        });
    }

    let fingerprint = snapshot_fingerprint(&entries, cfg.version);
    info!(
        entries = entries.len(),
        excluded = excluded.len(),
        fingerprint = %fingerprint,
        elapsed_micros = started.elapsed().as_micros() as u64,
        "snapshot_success"
    );

    Ok(CorpusSnapshot {
        entries,
        excluded,
        fingerprint,
        config_version: cfg.version,
    })
}

fn classify(
    index: usize,
    book: &Book,
    policy: MalformedPolicy,
) -> Result<SnapshotEntry, ExcludedBook> {
    let reject = |reason: MalformedReason| ExcludedBook {
        index,
        id: book.id.clone(),
        title: book.title.clone(),
        reason,
    };

    if book.id.trim().is_empty() {
        return Err(reject(MalformedReason::EmptyId));
    }
    if book.title.trim().is_empty() {
        return Err(reject(MalformedReason::EmptyTitle));
    }

    let genre_labels = parse_genre_labels(&book.genres);
    if genre_labels.is_empty() && policy == MalformedPolicy::Exclude {
        return Err(reject(MalformedReason::MissingGenres));
    }

    Ok(SnapshotEntry {
        book: book.clone(),
        genre_labels,
    })
}
