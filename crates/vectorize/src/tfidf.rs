//! TF-IDF weighting over token documents.
//!
//! TF normalizes a term's occurrence count by the number of DISTINCT
//! terms in the document, not by total token count. IDF is the natural
//! log of corpus size over document frequency. Terms present in every
//! document therefore weigh exactly zero.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::feature::TermWeights;

/// Term frequencies for one token document.
///
/// `TF(term) = occurrences(term) / distinct(document)`. An empty
/// document yields an empty map, so the division never sees zero.
pub(crate) fn term_frequencies(tokens: &[String]) -> TermWeights {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let distinct = counts.len();
    if distinct == 0 {
        return TermWeights::new();
    }
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f32 / distinct as f32))
        .collect()
}

/// Number of documents each term occurs in at least once.
pub(crate) fn document_frequencies(documents: &[Vec<String>]) -> BTreeMap<String, usize> {
    let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
    for document in documents {
        let distinct: BTreeSet<&str> = document.iter().map(String::as_str).collect();
        for term in distinct {
            *frequencies.entry(term.to_string()).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Sorted distinct terms across the supplied documents.
///
/// The order is the vocabulary order used when vectors are combined,
/// so it must be reproducible across runs.
pub fn field_vocabulary(documents: &[Vec<String>]) -> Vec<String> {
    let mut vocabulary: BTreeSet<String> = BTreeSet::new();
    for document in documents {
        for term in document {
            vocabulary.insert(term.clone());
        }
    }
    vocabulary.into_iter().collect()
}

/// TF-IDF vectors for every document of one field, in input order.
///
/// IDF is corpus-relative, so all documents of the field must be
/// supplied in one call. Each output map carries only the terms that
/// occur in its document; a weight may still be zero when the term
/// appears in every document.
pub(crate) fn weigh_documents(documents: &[Vec<String>], use_parallel: bool) -> Vec<TermWeights> {
    let document_count = documents.len();
    if document_count == 0 {
        return Vec::new();
    }

    let mut weighted: Vec<TermWeights> = Vec::with_capacity(document_count);
    if use_parallel {
        documents
            .par_iter()
            .map(|document| term_frequencies(document))
            .collect_into_vec(&mut weighted);
    } else {
        weighted.extend(documents.iter().map(|document| term_frequencies(document)));
    }

    let corpus_size = document_count as f32;
    let inverse: BTreeMap<String, f32> = document_frequencies(documents)
        .into_iter()
        .map(|(term, frequency)| (term, (corpus_size / frequency as f32).ln()))
        .collect();

    for weights in &mut weighted {
        for (term, weight) in weights.iter_mut() {
            // Terms in a document always have a document frequency.
            *weight *= inverse.get(term).copied().unwrap_or(0.0);
        }
    }
    weighted
}
