//! Pairwise similarity engine and tiered duplicate classifier.
//!
//! Works purely over [`DocumentProfile`]s produced by the normalizer: no
//! I/O, no shared mutable state. [`jaccard`] and [`score_pair`] are the
//! similarity primitives; [`classify`] applies the ordered tier rules to one
//! pair; [`compare_all`] runs the full O(n²) sweep, optionally sharded
//! across a rayon pool, and returns a canonically sorted edge list.
//!
//! Thresholds live in [`MatchConfig`] and are validated once at startup;
//! they are contract constants for a run, which is what makes two runs over
//! the same corpus byte-comparable.

mod engine;
mod similarity;
mod types;

pub use crate::engine::{classify, classify_pair, compare_all};
pub use crate::similarity::{jaccard, score_pair, PairScores};
pub use crate::types::{MatchConfig, MatchError, MatchTier, SimilarityEdge};

pub use normalize::DocumentProfile;
