use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::similarity::PairScores;

/// Ordered classification tiers, strongest evidence first.
///
/// Rules are evaluated in declaration order and the first match wins, so a
/// pair is never assigned two tiers; precedence is rule order, not severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTier {
    /// Canonical name-concept sets are identical: a bilingual pair.
    Translation,
    /// Strong name overlap confirmed by at least one content field.
    StrongName,
    /// Strong name overlap with two or more shared concept tokens.
    ConceptMatch,
    /// Very strong content overlap regardless of name.
    ContentMatch,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Translation => "TRANSLATION",
            MatchTier::StrongName => "STRONG_NAME",
            MatchTier::ConceptMatch => "CONCEPT_MATCH",
            MatchTier::ContentMatch => "CONTENT_MATCH",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched document pair.
///
/// Endpoints are stored in lexicographic order (`a < b`); together with the
/// final sort in the engine this makes edge lists canonical across runs and
/// thread counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityEdge {
    pub a: String,
    pub b: String,
    pub scores: PairScores,
    pub tier: MatchTier,
    pub reasons: Vec<String>,
}

/// Classifier thresholds.
///
/// These are constants of the classifier contract, configured and validated
/// once at startup and fixed for the whole run; they are never tunable per
/// call. The defaults are the contract values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version. Must be >= 1.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,

    /// Name similarity at or above which a pair is a bilingual pair.
    #[serde(default = "MatchConfig::default_translation_name_score")]
    pub translation_name_score: f64,

    /// Name similarity floor for the name-led tiers.
    #[serde(default = "MatchConfig::default_strong_name_score")]
    pub strong_name_score: f64,

    /// Content-field floor that confirms a strong name match.
    #[serde(default = "MatchConfig::default_content_confirm_score")]
    pub content_confirm_score: f64,

    /// Minimum shared name concepts for a concept match. Guards against a
    /// single shared generic word producing a false positive on small sets.
    #[serde(default = "MatchConfig::default_concept_min_shared")]
    pub concept_min_shared: usize,

    /// Title floor for a content-only match.
    #[serde(default = "MatchConfig::default_content_title_score")]
    pub content_title_score: f64,

    /// Heading floor for a content-only match.
    #[serde(default = "MatchConfig::default_content_heading_score")]
    pub content_heading_score: f64,

    /// Shard the O(n²) comparison across a rayon pool. Edges are sorted
    /// after collection, so the output is identical either way.
    #[serde(default = "MatchConfig::default_use_parallel")]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_translation_name_score() -> f64 {
        1.0
    }

    pub(crate) fn default_strong_name_score() -> f64 {
        0.5
    }

    pub(crate) fn default_content_confirm_score() -> f64 {
        0.3
    }

    pub(crate) fn default_concept_min_shared() -> usize {
        2
    }

    pub(crate) fn default_content_title_score() -> f64 {
        0.6
    }

    pub(crate) fn default_content_heading_score() -> f64 {
        0.5
    }

    pub(crate) fn default_use_parallel() -> bool {
        true
    }

    /// Validate the thresholds. Called once at startup; a violation is a
    /// fatal configuration error, before any scanning begins.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        for (field, value) in [
            ("translation_name_score", self.translation_name_score),
            ("strong_name_score", self.strong_name_score),
            ("content_confirm_score", self.content_confirm_score),
            ("content_title_score", self.content_title_score),
            ("content_heading_score", self.content_heading_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{field} must be within [0.0, 1.0] (got {value})"
                )));
            }
        }
        if self.concept_min_shared == 0 {
            return Err(MatchError::InvalidConfig(
                "concept_min_shared must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            translation_name_score: Self::default_translation_name_score(),
            strong_name_score: Self::default_strong_name_score(),
            content_confirm_score: Self::default_content_confirm_score(),
            concept_min_shared: Self::default_concept_min_shared(),
            content_title_score: Self::default_content_title_score(),
            content_heading_score: Self::default_content_heading_score(),
            use_parallel: Self::default_use_parallel(),
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid classifier thresholds.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
