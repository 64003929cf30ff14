//! Cosine similarity over sparse feature vectors.

use vectorize::FeatureVector;

/// Cosine similarity of two sparse vectors.
///
/// Returns zero when either vector has zero magnitude; the angle is
/// undefined there and a book with no features should score nothing
/// against anything.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f32 {
    let magnitude_product = a.magnitude() * b.magnitude();
    if magnitude_product == 0.0 {
        return 0.0;
    }
    let dot: f32 = a
        .iter()
        .map(|(key, weight)| weight * b.weight(key))
        .sum();
    dot / magnitude_product
}
