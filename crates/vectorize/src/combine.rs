//! Namespaced concatenation of per-field vectors.

use crate::feature::{FeatureKey, FeatureVector, TermWeights};

/// Combine one book's field vectors into a single namespaced vector.
///
/// Keys are drawn from the GLOBAL per-field vocabularies, so every
/// vector built for one corpus shares an identical key universe. The
/// combination is a straight concatenation; no field is re-weighted.
/// Zero weights are left out; absence means zero.
pub fn combine_features(
    title_weights: &TermWeights,
    genre_bits: &[u8],
    synopsis_weights: &TermWeights,
    title_vocabulary: &[String],
    synopsis_vocabulary: &[String],
) -> FeatureVector {
    let mut combined = FeatureVector::new();

    for term in title_vocabulary {
        if let Some(weight) = title_weights.get(term) {
            combined.insert(FeatureKey::Title(term.clone()), *weight);
        }
    }
    for (index, bit) in genre_bits.iter().enumerate() {
        if *bit != 0 {
            combined.insert(FeatureKey::Genre(index), 1.0);
        }
    }
    for term in synopsis_vocabulary {
        if let Some(weight) = synopsis_weights.get(term) {
            combined.insert(FeatureKey::Synopsis(term.clone()), *weight);
        }
    }
    combined
}
