//! Metadata normalizer.
//!
//! Reduces a scanned document's raw fields to canonical token sets that the
//! pairwise engine can compare. The pipeline per field is: strip boilerplate
//! (descriptions only), lowercase, split on non-word boundaries, drop
//! stopwords, and map each survivor through the bilingual concept table so
//! that "agua" and "water" land on one canonical token.
//!
//! Everything language-specific lives in the external [`Lexicon`] resource;
//! this crate contains no corpus vocabulary of its own. Given a lexicon,
//! [`profile`] is a pure function: no I/O, no shared state, deterministic
//! across runs and platforms.

mod error;
mod lexicon;
mod tokens;
mod types;

pub use crate::error::LexiconError;
pub use crate::lexicon::{Lexicon, LexiconData};
pub use crate::tokens::{name_tokens, strip_boilerplate, text_tokens, TokenSet};
pub use crate::types::DocumentProfile;

/// Build the canonical profile for one document.
///
/// An empty or whitespace-only field yields an empty token set, which the
/// similarity engine treats as "never a match" rather than as a trivial
/// 100% overlap.
pub fn profile(
    id: &str,
    title: &str,
    heading: &str,
    description: &str,
    lexicon: &Lexicon,
) -> DocumentProfile {
    let cleaned_description = strip_boilerplate(description, lexicon);
    DocumentProfile {
        id: id.to_string(),
        name: name_tokens(id, lexicon),
        title: text_tokens(title, lexicon),
        heading: text_tokens(heading, lexicon),
        description: text_tokens(&cleaned_description, lexicon),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_data(LexiconData {
            version: 1,
            stopwords: vec!["de".into(), "para".into(), "soberana".into()],
            boilerplate_patterns: vec![r"^.*?—\s*".into()],
            name_strip_prefixes: vec!["sovereign-".into()],
            name_strip_suffix_patterns: vec![r"-soberan[oa]s?$".into()],
            translations: BTreeMap::from([("water".to_string(), "agua".to_string())]),
        })
        .expect("test lexicon should build")
    }

    #[test]
    fn bilingual_renditions_share_a_name_set() {
        let lex = lexicon();
        let es = profile("agua-soberana", "Agua Soberana", "Agua", "", &lex);
        let en = profile("sovereign-water", "Sovereign Water", "Water", "", &lex);
        assert_eq!(es.name, en.name);
        assert!(es.description.is_empty());
    }

    #[test]
    fn description_boilerplate_removed_before_tokenizing() {
        let lex = lexicon();
        let doc = profile(
            "agua-soberana",
            "",
            "",
            "Agua Soberana — gestión de agua potable",
            &lex,
        );
        assert!(doc.description.contains("water"));
        assert!(doc.description.contains("potable"));
        // The stripped prefix must not leak into the set.
        assert!(!doc.description.contains("soberana"));
    }
}
