//! Pure set-similarity primitives.

use normalize::{DocumentProfile, TokenSet};
use serde::{Deserialize, Serialize};

/// Jaccard similarity of two token sets: `|a ∩ b| / |a ∪ b|`.
///
/// Defined as 0 when either operand is empty, never `0/0`. Symmetric,
/// bounded to `[0, 1]`, and 1 for any non-empty set compared to itself. An
/// empty field therefore can never contribute to a match.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Similarity scores for one unordered document pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairScores {
    pub name: f64,
    pub title: f64,
    pub heading: f64,
    pub description: f64,
    /// Canonical concepts shared by the two name sets, in sorted order.
    /// Tier rules need the intersection itself, not just its size.
    pub shared_concepts: Vec<String>,
}

/// Score every compared field for a pair of profiles. Pure; the profiles
/// are never mutated, so `score_pair(a, b)` and `score_pair(b, a)` agree.
pub fn score_pair(a: &DocumentProfile, b: &DocumentProfile) -> PairScores {
    PairScores {
        name: jaccard(&a.name, &b.name),
        title: jaccard(&a.title, &b.title),
        heading: jaccard(&a.heading, &b.heading),
        description: jaccard(&a.description, &b.description),
        shared_concepts: a.name.intersection(&b.name).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> TokenSet {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn identity_on_non_empty_sets() {
        let s = set(&["water", "commerce"]);
        assert_eq!(jaccard(&s, &s), 1.0);
    }

    #[test]
    fn empty_operand_scores_zero() {
        let s = set(&["water"]);
        let empty = TokenSet::new();
        assert_eq!(jaccard(&s, &empty), 0.0);
        assert_eq!(jaccard(&empty, &s), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn symmetric_and_bounded() {
        let a = set(&["vpn", "soberana"]);
        let b = set(&["vpn", "nacional"]);
        let ab = jaccard(&a, &b);
        assert_eq!(ab, jaccard(&b, &a));
        assert!((0.0..=1.0).contains(&ab));
        // One shared token out of three distinct.
        assert!((ab - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn shared_concepts_are_sorted() {
        let a = DocumentProfile {
            id: "a".into(),
            name: set(&["water", "commerce", "maps"]),
            title: TokenSet::new(),
            heading: TokenSet::new(),
            description: TokenSet::new(),
        };
        let b = DocumentProfile {
            id: "b".into(),
            name: set(&["maps", "water"]),
            title: TokenSet::new(),
            heading: TokenSet::new(),
            description: TokenSet::new(),
        };
        let scores = score_pair(&a, &b);
        assert_eq!(scores.shared_concepts, vec!["maps", "water"]);
    }
}
