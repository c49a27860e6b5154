//! Tiered classification and the O(n²) pairwise sweep.

use std::time::Instant;

use normalize::DocumentProfile;
use rayon::prelude::*;
use tracing::info;

use crate::similarity::{score_pair, PairScores};
use crate::types::{MatchConfig, MatchError, MatchTier, SimilarityEdge};


/// Apply the ordered tier rules to one pair's precomputed scores.
///
/// The first rule that matches wins and short-circuits the rest. Returns
/// `None` when no tier fires, which is the common case.
pub fn classify(scores: &PairScores, cfg: &MatchConfig) -> Option<(MatchTier, Vec<String>)> {
    // Tier 1: identical canonical name-concept sets. A bilingual pair.
    if scores.name >= cfg.translation_name_score {
        return Some((
            MatchTier::Translation,
            vec!["name match 100% (bilingual pair)".to_string()],
        ));
    }

    // Tier 2: strong name overlap, confirmed by at least one content field.
    if scores.name >= cfg.strong_name_score
        && (scores.title >= cfg.content_confirm_score
            || scores.heading >= cfg.content_confirm_score
            || scores.description >= cfg.content_confirm_score)
    {
        let mut reasons = vec![format!("name similarity={}", percent(scores.name))];
        if scores.title >= cfg.content_confirm_score {
            reasons.push(format!("title overlap={}", percent(scores.title)));
        }
        if scores.heading >= cfg.content_confirm_score {
            reasons.push(format!("heading overlap={}", percent(scores.heading)));
        }
        if scores.description >= cfg.content_confirm_score {
            reasons.push(format!("desc overlap={}", percent(scores.description)));
        }
        return Some((MatchTier::StrongName, reasons));
    }

    // Tier 3: strong name overlap carried by several shared concepts, so a
    // single shared generic word on tiny sets cannot fire it.
    if scores.name >= cfg.strong_name_score
        && scores.shared_concepts.len() >= cfg.concept_min_shared
    {
        return Some((
            MatchTier::ConceptMatch,
            vec![format!(
                "shared concepts: {}",
                scores.shared_concepts.join(", ")
            )],
        ));
    }

    // Tier 4: content evidence alone, independent of names.
    if scores.title >= cfg.content_title_score && scores.heading >= cfg.content_heading_score {
        return Some((
            MatchTier::ContentMatch,
            vec![format!(
                "title overlap={}, heading overlap={}",
                percent(scores.title),
                percent(scores.heading)
            )],
        ));
    }

    None
}

/// Compare every document pair and return the matched edges, sorted by
/// endpoint ids.
///
/// Each worker produces a private edge list with no shared mutable state;
/// the merge plus final sort make the result independent of scheduling.
pub fn compare_all(
    profiles: &[DocumentProfile],
    cfg: &MatchConfig,
) -> Result<Vec<SimilarityEdge>, MatchError> {
    cfg.validate()?;
    let start = Instant::now();

    let row = |i: usize| -> Vec<SimilarityEdge> {
        let mut edges = Vec::new();
        for j in (i + 1)..profiles.len() {
            if let Some(edge) = classify_pair(&profiles[i], &profiles[j], cfg) {
                edges.push(edge);
            }
        }
        edges
    };

    let mut edges: Vec<SimilarityEdge> = if cfg.use_parallel {
        (0..profiles.len())
            .into_par_iter()
            .flat_map_iter(row)
            .collect()
    } else {
        (0..profiles.len()).flat_map(row).collect()
    };
    edges.sort_by(|x, y| (&x.a, &x.b).cmp(&(&y.a, &y.b)));

    let n = profiles.len();
    info!(
        documents = n,
        pairs = n.saturating_sub(1) * n / 2,
        edges = edges.len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "pairwise_complete"
    );
    Ok(edges)
}

/// Score and classify one pair, producing an edge when a tier fires.
pub fn classify_pair(
    a: &DocumentProfile,
    b: &DocumentProfile,
    cfg: &MatchConfig,
) -> Option<SimilarityEdge> {
    let scores = score_pair(a, b);
    let (tier, reasons) = classify(&scores, cfg)?;
    let (first, second) = if a.id <= b.id { (a, b) } else { (b, a) };
    Some(SimilarityEdge {
        a: first.id.clone(),
        b: second.id.clone(),
        scores,
        tier,
        reasons,
    })
}

/// Whole-percent rendering used in reason strings, e.g. `67%`.
fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}
