//! Fixed Indonesian stopword set.
//!
//! Common function words that carry no topical signal for similarity.
//! The list is part of the pipeline contract: growing or shrinking it
//! changes every downstream vector, so treat edits like an algorithm
//! change and bump [`PreprocessConfig::version`](crate::PreprocessConfig).

use std::collections::HashSet;

use once_cell::sync::Lazy;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "di", "ke", "dari", "dan", "atau", "adalah", "ini", "itu", "yang",
        "untuk", "pada", "dengan", "oleh", "akan", "telah", "sudah", "dapat",
        "juga", "sebagai", "dalam", "serta", "karena", "jika", "maka",
        "seperti", "antara", "mereka", "kita", "kami", "saya", "anda", "dia",
        "ia", "nya", "ada", "tidak", "bukan", "belum", "hanya", "masih",
        "pernah", "sangat", "lebih", "paling", "setiap", "semua", "beberapa",
        "banyak", "sedikit", "lain", "lainnya", "sendiri",
    ]
    .into_iter()
    .collect()
});

/// Returns true when `token` is one of the fixed Indonesian stopwords.
///
/// Matching is exact. Callers are expected to lowercase first; the
/// pipeline in this crate always does.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
