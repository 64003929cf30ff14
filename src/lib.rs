//! Workspace umbrella crate for the Bukurec book recommender.
//!
//! This crate stitches together corpus intake, text preprocessing,
//! vectorization, and ranking so callers can go from raw books to
//! recommendations with a single API entry point.

pub use corpus::{
    Book, CorpusConfig, CorpusError, CorpusSnapshot, ExcludedBook, MalformedPolicy,
    MalformedReason, SnapshotEntry, build_snapshot, parse_genre_labels, snapshot_fingerprint,
};
pub use preprocess::{PreprocessConfig, PreprocessError, is_stopword, lemmatize, preprocess};
pub use recommender::{
    RecommendConfig, RecommendError, RecommendRequest, RecommendResponse, Recommendation,
    Recommender, TargetSelector, cosine_similarity,
};
pub use vectorize::{
    CorpusVectors, FeatureKey, FeatureVector, TermWeights, VectorizeConfig, VectorizeError,
    VectorizeMeta, corpus_feature_vectors, encode_genres, field_vocabulary, genre_vocabulary,
    tfidf_vectors,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for recommender stages.
pub trait RecommendMetrics: Send + Sync {
    fn record_snapshot(&self, latency: Duration, result: Result<(), CorpusError>);
    fn record_recommend(&self, latency: Duration, result: Result<(), RecommendError>);
}

/// Install or clear the global recommender metrics recorder.
pub fn set_recommend_metrics(recorder: Option<Arc<dyn RecommendMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("recommend metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn RecommendMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn RecommendMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn RecommendMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn RecommendMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_snapshot(self, result: Result<(), CorpusError>) {
        self.recorder.record_snapshot(self.start.elapsed(), result);
    }

    fn record_recommend(self, result: Result<(), RecommendError>) {
        self.recorder.record_recommend(self.start.elapsed(), result);
    }
}

/// Recommend against raw books using default configuration for every
/// stage.
pub fn recommend_books(
    books: &[Book],
    request: &RecommendRequest,
) -> Result<RecommendResponse, RecommendError> {
    recommend_books_with_configs(
        books,
        request,
        &CorpusConfig::default(),
        &PreprocessConfig::default(),
        &VectorizeConfig::default(),
        &RecommendConfig::default(),
    )
}

/// Recommend against raw books with explicit configuration for all
/// stages.
pub fn recommend_books_with_configs(
    books: &[Book],
    request: &RecommendRequest,
    corpus_cfg: &CorpusConfig,
    preprocess_cfg: &PreprocessConfig,
    vectorize_cfg: &VectorizeConfig,
    recommend_cfg: &RecommendConfig,
) -> Result<RecommendResponse, RecommendError> {
    let mut snapshot_metrics = MetricsSpan::start();
    let snapshot = match build_snapshot(books, corpus_cfg) {
        Ok(snapshot) => {
            if let Some(span) = snapshot_metrics.take() {
                span.record_snapshot(Ok(()));
            }
            snapshot
        }
        Err(err) => {
            if let Some(span) = snapshot_metrics.take() {
                span.record_snapshot(Err(err.clone()));
            }
            return Err(RecommendError::Corpus(err));
        }
    };

    recommend_snapshot_with_configs(
        &snapshot,
        request,
        corpus_cfg,
        preprocess_cfg,
        vectorize_cfg,
        recommend_cfg,
    )
}

/// Recommend against a prebuilt snapshot with explicit configuration.
pub fn recommend_snapshot_with_configs(
    snapshot: &CorpusSnapshot,
    request: &RecommendRequest,
    corpus_cfg: &CorpusConfig,
    preprocess_cfg: &PreprocessConfig,
    vectorize_cfg: &VectorizeConfig,
    recommend_cfg: &RecommendConfig,
) -> Result<RecommendResponse, RecommendError> {
    let engine = Recommender::new(
        corpus_cfg.clone(),
        preprocess_cfg.clone(),
        vectorize_cfg.clone(),
        recommend_cfg.clone(),
    );

    let mut recommend_metrics = MetricsSpan::start();
    match engine.recommend_snapshot(snapshot, request) {
        Ok(response) => {
            if let Some(span) = recommend_metrics.take() {
                span.record_recommend(Ok(()));
            }
            Ok(response)
        }
        Err(err) => {
            if let Some(span) = recommend_metrics.take() {
                span.record_recommend(Err(err.clone()));
            }
            Err(err)
        }
    }
}

/// Ten-book Indonesian sample corpus bundled for demos and smoke tests.
pub fn sample_corpus() -> Vec<Book> {
    const SAMPLE_BOOKS: &str = include_str!("../crates/corpus/examples/sample_books.json");
    serde_json::from_str(SAMPLE_BOOKS).expect("bundled sample corpus is valid JSON")
}

/// Convenience helper that runs a request against the bundled sample
/// corpus. Useful for demos and integration smoke tests.
pub fn sample_corpus_demo(
    request: &RecommendRequest,
) -> Result<RecommendResponse, RecommendError> {
    recommend_books(&sample_corpus(), request)
}
