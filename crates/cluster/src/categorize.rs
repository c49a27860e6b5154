//! Cluster categorization heuristics.

use crate::types::{ClusterCategory, ClusterConfig};

/// Label a cluster from its membership naming conventions.
///
/// A clean bilingual group has at least one member following the
/// foreign-language-prefixed convention and at least one that does not.
/// Anything else — including a cluster whose edges were all name-driven but
/// whose members share one convention — is a functional duplicate. The
/// second case is the inherited reclassification fallback: it is a coarse
/// heuristic and can mislabel multi-member clusters with mixed origins.
pub fn categorize(members: &[String], cfg: &ClusterConfig) -> ClusterCategory {
    let is_translated = |id: &String| {
        cfg.translated_prefixes
            .iter()
            .any(|prefix| id.starts_with(prefix.as_str()))
    };
    let has_translated = members.iter().any(is_translated);
    let has_plain = members.iter().any(|id| !is_translated(id));
    if has_translated && has_plain {
        ClusterCategory::TranslationPair
    } else {
        ClusterCategory::FunctionalDuplicate
    }
}
