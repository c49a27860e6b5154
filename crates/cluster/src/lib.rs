//! Disjoint-set clustering of matched pairs.
//!
//! Takes the full edge list from the pairwise engine and folds it into
//! connected components over all scanned document ids. Every document
//! starts as its own singleton, including documents with zero edges;
//! components therefore partition the scanned set. Components of size >= 2
//! come back as [`DuplicateCluster`]s with their internal edges and a
//! review category; singletons are counted only.
//!
//! This is the one stage with shared mutable state (the union-find arrays),
//! so it runs single-threaded after all edges are collected. It is cheap
//! next to the O(n²) comparison and a pure, deterministic reduction.

use std::collections::HashMap;
use std::time::Instant;

use matcher::SimilarityEdge;
use tracing::info;

mod categorize;
mod types;
mod union_find;

pub use crate::categorize::categorize;
pub use crate::types::{
    ClusterCategory, ClusterConfig, ClusterError, ClusterOutcome, DuplicateCluster,
};
pub use crate::union_find::UnionFind;

/// Merge all matched pairs into clusters.
///
/// `ids` is the full scanned-document set; unknown edge endpoints are a
/// caller bug and rejected. Output ordering is canonical: clusters by
/// descending size then first member, members sorted, edges sorted by
/// endpoints.
pub fn build_clusters(
    ids: &[String],
    edges: &[SimilarityEdge],
    cfg: &ClusterConfig,
) -> Result<ClusterOutcome, ClusterError> {
    cfg.validate()?;
    let start = Instant::now();

    let index_of: HashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), index))
        .collect();
    let lookup = |id: &String| -> Result<usize, ClusterError> {
        index_of
            .get(id.as_str())
            .copied()
            .ok_or_else(|| ClusterError::UnknownDocument(id.clone()))
    };

    let mut sets = UnionFind::new(ids.len());
    for edge in edges {
        sets.union(lookup(&edge.a)?, lookup(&edge.b)?);
    }

    let mut clusters = Vec::new();
    let mut singletons = 0usize;
    for component in sets.components() {
        if component.len() < 2 {
            singletons += component.len();
            continue;
        }
        let mut members: Vec<String> = component.iter().map(|&i| ids[i].clone()).collect();
        members.sort();
        let mut internal: Vec<SimilarityEdge> = edges
            .iter()
            .filter(|edge| members.binary_search(&edge.a).is_ok())
            .filter(|edge| members.binary_search(&edge.b).is_ok())
            .cloned()
            .collect();
        internal.sort_by(|x, y| (&x.a, &x.b).cmp(&(&y.a, &y.b)));
        let category = categorize(&members, cfg);
        clusters.push(DuplicateCluster {
            members,
            category,
            edges: internal,
        });
    }
    clusters.sort_by(|x, y| {
        y.members
            .len()
            .cmp(&x.members.len())
            .then_with(|| x.members[0].cmp(&y.members[0]))
    });

    info!(
        documents = ids.len(),
        edges = edges.len(),
        clusters = clusters.len(),
        singletons,
        elapsed_micros = start.elapsed().as_micros() as u64,
        "clustering_complete"
    );
    Ok(ClusterOutcome {
        clusters,
        singletons,
    })
}
