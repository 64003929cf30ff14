use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::PreprocessConfig;
use crate::error::PreprocessError;
use crate::lemma::lemmatize;
use crate::stopwords::is_stopword;

/// Main entry point. Reduces free text to an ordered lemma sequence.
///
/// Steps, in fixed order: Unicode NFKC (configurable), lowercasing,
/// non-word characters become token boundaries, whitespace tokenization,
/// short-token and stopword filtering, then first-match affix stripping.
/// Empty input yields an empty sequence.
pub fn preprocess(text: &str, cfg: &PreprocessConfig) -> Result<Vec<String>, PreprocessError> {
    cfg.validate()?;

    // NFKC comes first; it can change character boundaries.
    // Cow avoids the allocation when normalization is disabled.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    let scrubbed = scrub(normalized.as_ref());

    let mut lemmas: Vec<String> = Vec::new();
    for token in scrubbed.split_whitespace() {
        if token.chars().count() < cfg.min_token_chars {
            continue;
        }
        if cfg.filter_stopwords && is_stopword(token) {
            continue;
        }
        let lemma = if cfg.lemmatize { lemmatize(token) } else { token };
        lemmas.push(lemma.to_string());
    }
    Ok(lemmas)
}

/// Lowercase `text` and replace every character that is neither a word
/// character (Unicode alphanumeric or `_`) nor whitespace with a space.
/// Tokenization then reduces to whitespace splitting.
fn scrub(text: &str) -> String {
    let mut scrubbed = String::with_capacity(text.len());
    for ch in text.chars() {
        // Lowercasing can expand one char into several (e.g. German ß).
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() || lower == '_' {
                scrubbed.push(lower);
            } else {
                scrubbed.push(' ');
            }
        }
    }
    scrubbed
}
