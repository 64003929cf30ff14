//! Ordered affix-stripping rules for Indonesian lemmatization.
//!
//! This is deliberately not a full morphological stemmer. A fixed table
//! of common affixes is tested in order and the first matching rule
//! strips exactly once; everything else passes through unchanged.

/// One affix-stripping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AffixRule {
    Prefix(&'static str),
    Circumfix(&'static str, &'static str),
    Suffix(&'static str),
}

/// The fixed rule table, in application order.
///
/// Order is load-bearing: `men-` shadows `meng-` for every `meng-` word,
/// and `-an` shadows `-kan`. Reordering changes lemmas and therefore
/// every downstream vector.
const LEMMA_RULES: [AffixRule; 12] = [
    AffixRule::Prefix("men"),
    AffixRule::Prefix("mem"),
    AffixRule::Prefix("meng"),
    AffixRule::Prefix("me"),
    AffixRule::Prefix("ber"),
    AffixRule::Prefix("ter"),
    AffixRule::Prefix("pe"),
    AffixRule::Prefix("di"),
    AffixRule::Circumfix("ke", "an"),
    AffixRule::Suffix("an"),
    AffixRule::Suffix("kan"),
    AffixRule::Suffix("i"),
];

impl AffixRule {
    /// Apply this rule to `token`. A rule only matches when the stripped
    /// remainder is non-empty.
    fn strip<'a>(&self, token: &'a str) -> Option<&'a str> {
        match self {
            AffixRule::Prefix(prefix) => token
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty()),
            AffixRule::Circumfix(prefix, suffix) => token
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(suffix))
                .filter(|core| !core.is_empty()),
            AffixRule::Suffix(suffix) => token
                .strip_suffix(suffix)
                .filter(|rest| !rest.is_empty()),
        }
    }
}

/// Reduce `token` to a base form by stripping the first matching affix.
///
/// Tokens that match no rule are returned unchanged. Rules apply at most
/// once; derived forms are not recursively reduced, so `makanan` becomes
/// `makan`, not `mak`.
pub fn lemmatize(token: &str) -> &str {
    for rule in &LEMMA_RULES {
        if let Some(stripped) = rule.strip(token) {
            return stripped;
        }
    }
    token
}
