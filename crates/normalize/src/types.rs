use serde::{Deserialize, Serialize};

use crate::tokens::TokenSet;

/// Canonical token sets for one document, one per compared field.
///
/// Profiles are computed once per document after the scan and never mutated;
/// every similarity score downstream is a pure function of two profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentProfile {
    /// Stable document id (directory slug).
    pub id: String,
    /// Concept set of the id itself.
    pub name: TokenSet,
    /// Token set of the page title.
    pub title: TokenSet,
    /// Token set of the first-level heading.
    pub heading: TokenSet,
    /// Token set of the boilerplate-stripped description.
    pub description: TokenSet,
}
