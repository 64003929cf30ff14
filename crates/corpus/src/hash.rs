//! Snapshot fingerprinting.

use sha2::{Digest, Sha256};

use crate::types::SnapshotEntry;

// ASCII unit and record separators keep field and entry boundaries
// unambiguous regardless of book content.
const FIELD_SEP: u8 = 0x1F;
const RECORD_SEP: u8 = 0x1E;

/// Hex SHA-256 over the recommendation-relevant content of a snapshot.
///
/// Covers the config version and each entry's id, title, parsed genre
/// labels, and synopsis, in entry order. Caller attributes are
/// passthrough metadata and do not participate. Two snapshots with
/// equal fingerprints produce identical recommendations.
pub fn snapshot_fingerprint(entries: &[SnapshotEntry], config_version: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(config_version.to_be_bytes());

    for entry in entries {
        hasher.update([RECORD_SEP]);
        hasher.update(entry.book.id.as_bytes());
        hasher.update([FIELD_SEP]);
        hasher.update(entry.book.title.as_bytes());
        hasher.update([FIELD_SEP]);
        for label in &entry.genre_labels {
            hasher.update(label.as_bytes());
            hasher.update([FIELD_SEP]);
        }
        hasher.update(entry.book.synopsis.as_bytes());
    }

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::parse_genre_labels;
    use crate::types::Book;

    fn entry(id: &str, title: &str, genres: &str, synopsis: &str) -> SnapshotEntry {
        SnapshotEntry {
            book: Book::new(id, title, genres, synopsis),
            genre_labels: parse_genre_labels(genres),
        }
    }

    #[test]
    fn fingerprint_is_hex_sha256() {
        let fingerprint = snapshot_fingerprint(&[], 1);
        assert_eq!(fingerprint.len(), 64);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn identical_snapshots_share_a_fingerprint() {
        let a = vec![entry("b-1", "Kucing", "fantasi", "Seekor kucing.")];
        let b = vec![entry("b-1", "Kucing", "fantasi", "Seekor kucing.")];
        assert_eq!(snapshot_fingerprint(&a, 1), snapshot_fingerprint(&b, 1));
    }

    #[test]
    fn content_changes_change_the_fingerprint() {
        let base = vec![entry("b-1", "Kucing", "fantasi", "Seekor kucing.")];
        let other_title = vec![entry("b-1", "Anjing", "fantasi", "Seekor kucing.")];
        let other_genre = vec![entry("b-1", "Kucing", "drama", "Seekor kucing.")];

        let fingerprint = snapshot_fingerprint(&base, 1);
        assert_ne!(fingerprint, snapshot_fingerprint(&other_title, 1));
        assert_ne!(fingerprint, snapshot_fingerprint(&other_genre, 1));
    }

    #[test]
    fn config_version_participates() {
        let entries = vec![entry("b-1", "Kucing", "fantasi", "")];
        assert_ne!(
            snapshot_fingerprint(&entries, 1),
            snapshot_fingerprint(&entries, 2)
        );
    }

    #[test]
    fn attributes_do_not_participate() {
        let plain = vec![entry("b-1", "Kucing", "fantasi", "")];
        let mut annotated = plain.clone();
        annotated[0].book = annotated[0]
            .book
            .clone()
            .with_attribute("penerbit", "Gramedia");

        assert_eq!(
            snapshot_fingerprint(&plain, 1),
            snapshot_fingerprint(&annotated, 1)
        );
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        // Shifting a character across a field boundary must not collide.
        let a = vec![entry("b-1x", "Kucing", "fantasi", "")];
        let b = vec![entry("b-1", "xKucing", "fantasi", "")];
        assert_ne!(snapshot_fingerprint(&a, 1), snapshot_fingerprint(&b, 1));
    }

    #[test]
    fn entry_order_participates() {
        let first = entry("b-1", "Kucing", "fantasi", "");
        let second = entry("b-2", "Anjing", "drama", "");
        assert_ne!(
            snapshot_fingerprint(&[first.clone(), second.clone()], 1),
            snapshot_fingerprint(&[second, first], 1)
        );
    }
}
