//! Feature vectorization for book corpora.
//!
//! Turns preprocessed token documents and parsed genre labels into
//! sparse, namespaced feature vectors that are directly comparable
//! with cosine similarity.
//!
//! ## Contract
//!
//! Output is a pure function of the inputs and the [`VectorizeConfig`].
//! All corpus-relative state (document frequencies, vocabularies) is
//! computed from the documents supplied in one call; vectors from
//! different calls are only comparable if the inputs were identical.
//!
//! ## Core pipeline
//!
//! 1. TF-IDF weigh title and synopsis documents independently.
//! 2. Build the sorted genre vocabulary and per-book multi-hot bits.
//! 3. Concatenate the fields under disjoint `title_*` / `genre_i` /
//!    `synopsis_*` key namespaces.
//!
//! ## Example
//!
//! ```
//! use vectorize::{corpus_feature_vectors, VectorizeConfig};
//!
//! let titles = vec![
//!     vec!["kucing".to_string(), "anjing".to_string()],
//!     vec!["kucing".to_string(), "burung".to_string()],
//! ];
//! let genres = vec![
//!     vec!["fantasi".to_string()],
//!     vec!["fantasi".to_string(), "drama".to_string()],
//! ];
//! let synopses: Vec<Vec<String>> = vec![Vec::new(), Vec::new()];
//!
//! let corpus =
//!     corpus_feature_vectors(&titles, &genres, &synopses, &VectorizeConfig::default()).unwrap();
//! assert_eq!(corpus.vectors.len(), 2);
//! assert_eq!(
//!     corpus.genre_vocabulary,
//!     vec!["drama".to_string(), "fantasi".to_string()]
//! );
//! ```

pub mod config;
pub mod feature;

mod combine;
mod multihot;
mod tfidf;

pub use config::{VectorizeConfig, VectorizeError};
pub use feature::{CorpusVectors, FeatureKey, FeatureVector, TermWeights, VectorizeMeta};

pub use combine::combine_features;
pub use multihot::{encode_genres, genre_vocabulary};
pub use tfidf::field_vocabulary;

/// Version of the vectorization algorithm itself, independent of the
/// config schema version.
pub const VECTORIZE_VERSION: u16 = 1;

/// Identifier of the weighting scheme, recorded in [`VectorizeMeta`].
pub const VECTORIZE_ALGORITHM: &str = "tfidf-multihot-concat";

/// TF-IDF vectors for one text field of the corpus.
///
/// Exposed for callers that want field-level weights without the full
/// combination step. Output order matches input order.
pub fn tfidf_vectors(
    documents: &[Vec<String>],
    cfg: &VectorizeConfig,
) -> Result<Vec<TermWeights>, VectorizeError> {
    cfg.validate()?;
    Ok(tfidf::weigh_documents(documents, cfg.use_parallel))
}

/// Vectorize one corpus of books.
///
/// The three slices are parallel: index `i` of each describes book `i`.
/// Books with empty fields are fine; their vectors simply lack those
/// components. An empty corpus yields no vectors and empty
/// vocabularies rather than an error; emptiness policy is the
/// caller's concern.
pub fn corpus_feature_vectors(
    title_docs: &[Vec<String>],
    genre_labels: &[Vec<String>],
    synopsis_docs: &[Vec<String>],
    cfg: &VectorizeConfig,
) -> Result<CorpusVectors, VectorizeError> {
    cfg.validate()?;
    if title_docs.len() != genre_labels.len() || title_docs.len() != synopsis_docs.len() {
        return Err(VectorizeError::FieldLengthMismatch {
            titles: title_docs.len(),
            genres: genre_labels.len(),
            synopses: synopsis_docs.len(),
        });
    }

    // Step 1: TF-IDF weigh each text field over the whole corpus.
    let title_weights = tfidf::weigh_documents(title_docs, cfg.use_parallel);
    let synopsis_weights = tfidf::weigh_documents(synopsis_docs, cfg.use_parallel);

    // Step 2: corpus-wide vocabularies fix the shared key universe.
    let title_vocabulary = tfidf::field_vocabulary(title_docs);
    let synopsis_vocabulary = tfidf::field_vocabulary(synopsis_docs);
    let genre_vocabulary = multihot::genre_vocabulary(genre_labels);

    // Step 3: per-book multi-hot bits and namespaced concatenation.
    let vectors: Vec<FeatureVector> = (0..title_docs.len())
        .map(|index| {
            let bits = multihot::encode_genres(&genre_labels[index], &genre_vocabulary);
            combine::combine_features(
                &title_weights[index],
                &bits,
                &synopsis_weights[index],
                &title_vocabulary,
                &synopsis_vocabulary,
            )
        })
        .collect();

    let meta = VectorizeMeta {
        algorithm_name: VECTORIZE_ALGORITHM.to_string(),
        algorithm_version: VECTORIZE_VERSION,
        config_version: cfg.version,
        document_count: title_docs.len(),
        title_vocabulary_len: title_vocabulary.len(),
        genre_vocabulary_len: genre_vocabulary.len(),
        synopsis_vocabulary_len: synopsis_vocabulary.len(),
        use_parallel: cfg.use_parallel,
    };

    Ok(CorpusVectors {
        vectors,
        genre_vocabulary,
        meta,
    })
}
