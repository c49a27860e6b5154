//! The lexicon: one external, versioned data resource holding everything the
//! normalizer needs to know about the corpus language.
//!
//! Historically the translation table, stopwords, and boilerplate patterns
//! lived as literals inside the finder script. They are configuration, not
//! code: auditing or extending the concept table must not require a rebuild,
//! so the whole bundle is loaded from YAML at startup and validated once.
//!
//! # Versioning
//!
//! `version` must be >= 1 and must be bumped for any change that can alter a
//! canonical token set, so that two runs reporting different clusters can be
//! traced to a lexicon revision rather than a code change.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// On-disk shape of the lexicon resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexiconData {
    /// Lexicon schema version. Must be >= 1.
    pub version: u32,

    /// Bilingual stopword list: articles, prepositions, and corpus-specific
    /// filler (brand words) removed before comparison.
    #[serde(default)]
    pub stopwords: Vec<String>,

    /// Regex patterns stripped from descriptions before tokenizing, in
    /// order. Shared marketing disclaimers inflate similarity between
    /// unrelated documents; they are removed so only unique content is
    /// compared.
    #[serde(default)]
    pub boilerplate_patterns: Vec<String>,

    /// Literal prefixes stripped from a document id before concept mapping.
    #[serde(default)]
    pub name_strip_prefixes: Vec<String>,

    /// Regex patterns stripped from a document id before concept mapping.
    #[serde(default)]
    pub name_strip_suffix_patterns: Vec<String>,

    /// Concept translation table, canonical token -> foreign-language
    /// equivalent. Both sides of an entry resolve to the canonical key.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

/// Runtime lexicon with compiled patterns and the bidirectional concept
/// index. Built once at startup; never mutated afterward.
#[derive(Debug)]
pub struct Lexicon {
    version: u32,
    stopwords: BTreeSet<String>,
    boilerplate: Vec<Regex>,
    name_prefixes: Vec<String>,
    name_suffixes: Vec<Regex>,
    // token -> canonical concept, covering both directions of the table.
    concepts: BTreeMap<String, String>,
}

impl Lexicon {
    /// Build a runtime lexicon from parsed data, compiling all patterns.
    pub fn from_data(data: LexiconData) -> Result<Self, LexiconError> {
        if data.version == 0 {
            return Err(LexiconError::Validation(
                "version must be >= 1".to_string(),
            ));
        }

        let mut concepts = BTreeMap::new();
        for (canonical, foreign) in &data.translations {
            if canonical.trim().is_empty() || foreign.trim().is_empty() {
                return Err(LexiconError::Validation(format!(
                    "translation entry `{canonical}` -> `{foreign}` has an empty side"
                )));
            }
            concepts.insert(canonical.clone(), canonical.clone());
            concepts.insert(foreign.clone(), canonical.clone());
        }

        Ok(Self {
            version: data.version,
            stopwords: data.stopwords.iter().cloned().collect(),
            boilerplate: compile_all(&data.boilerplate_patterns)?,
            name_prefixes: data.name_strip_prefixes.clone(),
            name_suffixes: compile_all(&data.name_strip_suffix_patterns)?,
            concepts,
        })
    }

    /// Parse and build a lexicon from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let data: LexiconData = serde_yaml::from_str(yaml)?;
        Self::from_data(data)
    }

    /// Load a lexicon resource from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Resolve a token to its canonical concept. Tokens on either side of a
    /// translation entry resolve to the canonical key; unmapped tokens pass
    /// through unchanged.
    pub fn canonical_concept<'a>(&'a self, token: &'a str) -> &'a str {
        self.concepts.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub(crate) fn boilerplate_patterns(&self) -> &[Regex] {
        &self.boilerplate
    }

    pub(crate) fn name_prefixes(&self) -> &[String] {
        &self.name_prefixes
    }

    pub(crate) fn name_suffix_patterns(&self) -> &[Regex] {
        &self.name_suffixes
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, LexiconError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| LexiconError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_data() -> LexiconData {
        LexiconData {
            version: 1,
            stopwords: vec!["the".into(), "de".into()],
            boilerplate_patterns: vec![r"^.*?—\s*".into()],
            name_strip_prefixes: vec!["sovereign-".into()],
            name_strip_suffix_patterns: vec![r"-soberan[oa]s?$".into()],
            translations: BTreeMap::from([("water".to_string(), "agua".to_string())]),
        }
    }

    #[test]
    fn both_directions_resolve_to_canonical_key() {
        let lex = Lexicon::from_data(small_data()).expect("lexicon should build");
        assert_eq!(lex.canonical_concept("agua"), "water");
        assert_eq!(lex.canonical_concept("water"), "water");
        assert_eq!(lex.canonical_concept("vpn"), "vpn");
    }

    #[test]
    fn zero_version_rejected() {
        let data = LexiconData {
            version: 0,
            ..small_data()
        };
        let err = Lexicon::from_data(data).expect_err("version 0 must be rejected");
        assert!(matches!(err, LexiconError::Validation(msg) if msg.contains("version")));
    }

    #[test]
    fn bad_pattern_rejected_with_context() {
        let data = LexiconData {
            boilerplate_patterns: vec!["(unclosed".into()],
            ..small_data()
        };
        let err = Lexicon::from_data(data).expect_err("bad regex must be rejected");
        assert!(matches!(err, LexiconError::Pattern { pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn yaml_round_trip_from_file() {
        let yaml = r#"
version: 1
stopwords: [the, de]
translations:
  water: agua
"#;
        let tmp = tempfile::NamedTempFile::new().expect("temp file");
        std::fs::write(tmp.path(), yaml).expect("write lexicon yaml");
        let lex = Lexicon::from_file(tmp.path()).expect("lexicon should load");
        assert_eq!(lex.version(), 1);
        assert!(lex.is_stopword("de"));
        assert_eq!(lex.canonical_concept("agua"), "water");
    }
}
