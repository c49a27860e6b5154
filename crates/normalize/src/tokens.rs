//! Token-set construction.
//!
//! Free-text fields and document ids reduce to [`TokenSet`]s: lowercase,
//! stopword-free, concept-mapped. A `BTreeSet` keeps iteration order
//! deterministic, which matters because shared concepts end up verbatim in
//! report reason strings.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

/// A set of lowercase canonical tokens derived from one document field.
pub type TokenSet = BTreeSet<String>;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Remove configured boilerplate from a raw description.
///
/// Patterns apply in lexicon order; what survives is the unique content of
/// the field.
pub fn strip_boilerplate(text: &str, lexicon: &Lexicon) -> String {
    let mut cleaned = text.to_string();
    for pattern in lexicon.boilerplate_patterns() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Canonical token set for a free-text field: lowercase, split on non-word
/// boundaries, stopwords removed, every survivor mapped through the concept
/// table. Empty or whitespace-only input yields an empty set.
pub fn text_tokens(text: &str, lexicon: &Lexicon) -> TokenSet {
    if text.trim().is_empty() {
        return TokenSet::new();
    }
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !lexicon.is_stopword(token))
        .map(|token| lexicon.canonical_concept(token).to_string())
        .collect()
}

/// Canonical concept set for a document id.
///
/// Language affixes are stripped first (they mark which rendition a
/// directory is, not what the document is about), then the remaining
/// segments map through the concept table. Stopwords are deliberately left
/// in: id segments are already curated words, and the affix rules carry the
/// filler.
pub fn name_tokens(id: &str, lexicon: &Lexicon) -> TokenSet {
    let mut name = id.to_lowercase();
    for prefix in lexicon.name_prefixes() {
        if let Some(stripped) = name.strip_prefix(prefix.as_str()) {
            name = stripped.to_string();
            break;
        }
    }
    for pattern in lexicon.name_suffix_patterns() {
        name = pattern.replace_all(&name, "").into_owned();
    }
    name.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| lexicon.canonical_concept(segment).to_string())
        .collect()
}
