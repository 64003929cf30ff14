//! Multi-hot genre encoding over a corpus-wide vocabulary.
//!
//! Labels are expected already case-folded and trimmed by the caller;
//! this module only fixes the vocabulary order and produces bits.

use std::collections::BTreeSet;

/// Sorted distinct genre labels across the corpus.
///
/// Sorting pins the vocabulary order, and with it every `genre_i`
/// feature index, independent of book order.
pub fn genre_vocabulary(label_lists: &[Vec<String>]) -> Vec<String> {
    let mut vocabulary: BTreeSet<String> = BTreeSet::new();
    for labels in label_lists {
        for label in labels {
            vocabulary.insert(label.clone());
        }
    }
    vocabulary.into_iter().collect()
}

/// Multi-hot encoding of `labels` against `vocabulary`.
///
/// One 0/1 entry per vocabulary genre, in vocabulary order. Duplicate
/// labels set the same bit once; labels missing from the vocabulary are
/// ignored; no labels means all zeroes.
pub fn encode_genres(labels: &[String], vocabulary: &[String]) -> Vec<u8> {
    vocabulary
        .iter()
        .map(|genre| u8::from(labels.iter().any(|label| label == genre)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn vocabulary_is_sorted_across_books() {
        let lists = vec![
            labels(&["fantasi", "petualangan"]),
            labels(&["drama", "fantasi"]),
        ];
        assert_eq!(
            genre_vocabulary(&lists),
            vec![
                "drama".to_string(),
                "fantasi".to_string(),
                "petualangan".to_string()
            ]
        );
    }

    #[test]
    fn encoding_follows_vocabulary_order() {
        let vocabulary = labels(&["drama", "fantasi", "petualangan"]);
        assert_eq!(
            encode_genres(&labels(&["petualangan", "drama"]), &vocabulary),
            vec![1, 0, 1]
        );
    }

    #[test]
    fn duplicate_labels_set_one_bit() {
        let vocabulary = labels(&["drama", "fantasi"]);
        assert_eq!(
            encode_genres(&labels(&["fantasi", "fantasi"]), &vocabulary),
            vec![0, 1]
        );
    }

    #[test]
    fn no_labels_encode_to_zeroes() {
        let vocabulary = labels(&["drama", "fantasi"]);
        assert_eq!(encode_genres(&[], &vocabulary), vec![0, 0]);
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let vocabulary = labels(&["drama"]);
        assert_eq!(encode_genres(&labels(&["horor"]), &vocabulary), vec![0]);
    }

    #[test]
    fn empty_vocabulary_encodes_to_nothing() {
        assert!(encode_genres(&labels(&["drama"]), &[]).is_empty());
    }
}
