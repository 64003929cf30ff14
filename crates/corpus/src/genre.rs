//! Genre label string parsing.

/// Parse a comma-separated genre string into individual labels.
///
/// Labels are trimmed and case-folded; empty segments (doubled commas,
/// trailing commas, whitespace-only pieces) are dropped. Order and
/// duplicates are preserved; the multi-hot encoder is idempotent over
/// repeats.
pub fn parse_genre_labels(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_split_trimmed_and_folded() {
        assert_eq!(
            parse_genre_labels("Fantasi,  Petualangan , DRAMA"),
            vec![
                "fantasi".to_string(),
                "petualangan".to_string(),
                "drama".to_string()
            ]
        );
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(
            parse_genre_labels("fantasi,, drama,  ,"),
            vec!["fantasi".to_string(), "drama".to_string()]
        );
    }

    #[test]
    fn blank_string_yields_no_labels() {
        assert!(parse_genre_labels("").is_empty());
        assert!(parse_genre_labels("   ").is_empty());
        assert!(parse_genre_labels(",,,").is_empty());
    }

    #[test]
    fn duplicates_survive_parsing() {
        assert_eq!(
            parse_genre_labels("drama, Drama"),
            vec!["drama".to_string(), "drama".to_string()]
        );
    }

    #[test]
    fn non_ascii_labels_fold_correctly() {
        assert_eq!(
            parse_genre_labels("Fiksi Ilmiah, MISTERI"),
            vec!["fiksi ilmiah".to_string(), "misteri".to_string()]
        );
    }
}
