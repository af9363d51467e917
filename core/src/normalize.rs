use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Literal location token meaning "no geographic constraint".
pub const REMOTE: &str = "remote";

/// Canonical comparison key for a skill, language or location token:
/// NFKC, lowercase, trimmed, internal whitespace collapsed to one space.
/// Whitespace-only input yields an empty string.
pub fn normalize_token(raw: &str) -> String {
    let folded = raw.nfkc().collect::<String>().to_lowercase();
    WHITESPACE.replace_all(folded.trim(), " ").into_owned()
}

/// Normalize a collection of tokens into a set, discarding empty keys.
/// Ordered so that anything derived from it is reproducible.
pub fn normalize_set<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| normalize_token(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect()
}
