//! The recommendation engine.
//!
//! Wires corpus intake, text preprocessing, vectorization, and cosine
//! ranking behind one entry point. The engine owns a config per stage
//! and nothing else, so it is cheap to build and freely shareable.


use std::time::Instant;

use tracing::{info, span, Level};

use corpus::{build_snapshot, Book, CorpusConfig, CorpusSnapshot};
use preprocess::{preprocess, PreprocessConfig};
use vectorize::{corpus_feature_vectors, CorpusVectors, VectorizeConfig};

use crate::similarity::cosine_similarity;
use crate::types::{
    RecommendConfig, RecommendError, RecommendRequest, RecommendResponse, Recommendation,
    TargetSelector,
};

/// Content-based book recommender.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    corpus: CorpusConfig,
    preprocess: PreprocessConfig,
    vectorize: VectorizeConfig,
    recommend: RecommendConfig,
}

impl Recommender {
    pub fn new(
        corpus: CorpusConfig,
        preprocess: PreprocessConfig,
        vectorize: VectorizeConfig,
        recommend: RecommendConfig,
    ) -> Self {
        Self {
            corpus,
            preprocess,
            vectorize,
            recommend,
        }
    }

    /// Recommend against raw books, building a snapshot first.
    pub fn recommend(
        &self,
        books: &[Book],
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, RecommendError> {
        let snapshot = build_snapshot(books, &self.corpus)?;
        self.recommend_snapshot(&snapshot, request)
    }

    /// Recommend against a prebuilt snapshot.
    ///
    /// Scores every other book against the target, sorts best first
    /// with ties keeping corpus order, and truncates to the requested
    /// cap (engine default when the request carries none).
    pub fn recommend_snapshot(
        &self,
        snapshot: &CorpusSnapshot,
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, RecommendError> {
        let span = span!(
            Level::INFO,
            "recommender.recommend",
            fingerprint = %snapshot.fingerprint
        );
        let _guard = span.enter();
        let started = Instant::now();

        request.validate()?;
        self.recommend.validate()?;

        let target_index = locate_target(snapshot, &request.selector)?;

        let mut title_docs: Vec<Vec<String>> = Vec::with_capacity(snapshot.len());
        let mut synopsis_docs: Vec<Vec<String>> = Vec::with_capacity(snapshot.len());
        let mut genre_labels: Vec<Vec<String>> = Vec::with_capacity(snapshot.len());
        for entry in &snapshot.entries {
            title_docs.push(preprocess(&entry.book.title, &self.preprocess)?);
            synopsis_docs.push(preprocess(&entry.book.synopsis, &self.preprocess)?);
            genre_labels.push(entry.genre_labels.clone());
        }

        let corpus_vectors =
            corpus_feature_vectors(&title_docs, &genre_labels, &synopsis_docs, &self.vectorize)?;

        let limit = request.top_n.unwrap_or(self.recommend.top_n);
        let recommendations = rank(snapshot, &corpus_vectors, target_index, limit);

        info!(
            target = %snapshot.entries[target_index].book.id,
            hits = recommendations.len(),
            limit,
            elapsed_micros = started.elapsed().as_micros() as u64,
            "recommend_success"
        );

        Ok(RecommendResponse {
            target: snapshot.entries[target_index].book.clone(),
            recommendations,
            fingerprint: snapshot.fingerprint.clone(),
            excluded: snapshot.excluded.clone(),
        })
    }
}

fn locate_target(
    snapshot: &CorpusSnapshot,
    selector: &TargetSelector,
) -> Result<usize, RecommendError> {
    let found = match selector {
        TargetSelector::Id(id) => snapshot
            .entries
            .iter()
            .position(|entry| entry.book.id == *id),
        TargetSelector::Title(fragment) => {
            let needle = fragment.to_lowercase();
            snapshot
                .entries
                .iter()
                .position(|entry| entry.book.title.to_lowercase().contains(&needle))
        }
    };
    found.ok_or_else(|| RecommendError::TargetNotFound {
        selector: selector.clone(),
    })
}

fn rank(
    snapshot: &CorpusSnapshot,
    vectors: &CorpusVectors,
    target_index: usize,
    limit: usize,
) -> Vec<Recommendation> {
    let target_vector = &vectors.vectors[target_index];
    let mut hits: Vec<Recommendation> = snapshot
        .entries
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != target_index)
        .map(|(index, entry)| Recommendation {
            book: entry.book.clone(),
            score: cosine_similarity(target_vector, &vectors.vectors[index]),
        })
        .collect();

    // sort_by is stable, so equal scores keep corpus order.
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(limit);
    hits
}
