use std::fmt;

use matcher::SimilarityEdge;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Review label for a duplicate cluster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterCategory {
    /// The cluster looks like one document in two language renditions.
    TranslationPair,
    /// Same purpose, independent documents; candidates for a merge review.
    FunctionalDuplicate,
}

impl ClusterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterCategory::TranslationPair => "TRANSLATION_PAIR",
            ClusterCategory::FunctionalDuplicate => "FUNCTIONAL_DUPLICATE",
        }
    }
}

impl fmt::Display for ClusterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connected component of size >= 2, emitted once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateCluster {
    /// Member document ids, sorted.
    pub members: Vec<String>,
    pub category: ClusterCategory,
    /// Edges with both endpoints inside this cluster, sorted by endpoints.
    pub edges: Vec<SimilarityEdge>,
}

/// Result of clustering one corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterOutcome {
    /// Clusters of size >= 2, ordered by descending size then first member.
    pub clusters: Vec<DuplicateCluster>,
    /// Documents that matched nothing. Counted, not listed.
    pub singletons: usize,
}

/// Configuration for cluster categorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Configuration schema version. Must be >= 1.
    #[serde(default = "ClusterConfig::default_version")]
    pub version: u32,

    /// Id prefixes marking the foreign-language-prefixed naming convention.
    /// A cluster holding at least one member with such a prefix and at
    /// least one without is labeled a translation pair.
    #[serde(default = "ClusterConfig::default_translated_prefixes")]
    pub translated_prefixes: Vec<String>,
}

impl ClusterConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_translated_prefixes() -> Vec<String> {
        vec!["sovereign-".to_string()]
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.version == 0 {
            return Err(ClusterError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        if self.translated_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ClusterError::InvalidConfig(
                "translated_prefixes must not contain empty strings".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            translated_prefixes: Self::default_translated_prefixes(),
        }
    }
}

/// Errors produced by the clustering layer.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("invalid cluster config: {0}")]
    InvalidConfig(String),

    /// An edge referenced a document id that is not in the scanned set.
    /// Edges are built from the same profile list, so this indicates a
    /// caller bug, not corpus data.
    #[error("edge endpoint `{0}` is not a scanned document")]
    UnknownDocument(String),
}
