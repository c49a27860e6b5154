//! Workspace umbrella crate for dupscan.
//!
//! Stitches the stage crates into one batch pipeline so callers can go from
//! a corpus root to a duplicate report with a single call:
//! scan → normalize → pairwise match → cluster → report.
//!
//! Every stage receives its configuration explicitly through
//! [`PipelineConfig`]; there is no ambient or global state anywhere in the
//! pipeline. Anything that would make only part of a report correct is
//! fatal and aborts with no report; anything that affects only one
//! document's inclusion was already recovered inside the scanner by
//! exclusion plus counting.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

pub mod config;
pub mod report;

pub use crate::config::{ConfigLoadError, DupscanConfig, PipelineConfig};
pub use crate::report::{write_report, DedupReport, GroupEdge, GroupReport, ReportSummary};
pub use cluster::{ClusterCategory, ClusterConfig, ClusterError, ClusterOutcome, DuplicateCluster};
pub use matcher::{MatchConfig, MatchError, MatchTier, SimilarityEdge};
pub use normalize::{DocumentProfile, Lexicon, LexiconError};
pub use scan::{Document, ScanConfig, ScanError, ScanOutcome};

use thiserror::Error;

/// Errors that can occur while running the pipeline end-to-end.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("config failure: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("scan failure: {0}")]
    Scan(#[from] ScanError),

    #[error("match failure: {0}")]
    Match(#[from] MatchError),

    #[error("cluster failure: {0}")]
    Cluster(#[from] ClusterError),

    #[error("report failure: {0}")]
    Report(#[from] report::ReportError),
}

/// Run the full pipeline over a corpus root.
pub fn run(root: &Path, cfg: &PipelineConfig) -> Result<DedupReport, PipelineError> {
    let start = Instant::now();

    let scan_outcome = scan::scan(root, &cfg.scan)?;

    // Per-document normalization is independent and write-once, so it rides
    // the same worker-pool switch as the scanner. Input order is preserved.
    let to_profile = |doc: &Document| {
        normalize::profile(&doc.id, &doc.title, &doc.heading, &doc.description, &cfg.lexicon)
    };
    let mut profiles: Vec<DocumentProfile> = if cfg.scan.use_parallel {
        scan_outcome.documents.par_iter().map(to_profile).collect()
    } else {
        scan_outcome.documents.iter().map(to_profile).collect()
    };
    profiles.sort_by(|a, b| a.id.cmp(&b.id));

    let edges = matcher::compare_all(&profiles, &cfg.matcher)?;

    let ids: Vec<String> = profiles.iter().map(|p| p.id.clone()).collect();
    let outcome = cluster::build_clusters(&ids, &edges, &cfg.cluster)?;

    let report = report::build_report(&scan_outcome, &outcome);
    info!(
        scanned = report.scanned,
        groups = report.groups.len(),
        potential_removals = report.summary.potential_removals,
        elapsed_micros = start.elapsed().as_micros() as u64,
        "pipeline_complete"
    );
    Ok(report)
}

/// Run with a config loaded from an optional YAML file, writing the JSON
/// report when an output path is given. Nothing is written on a fatal
/// error.
pub fn run_to_completion(
    root: &Path,
    config_path: Option<&Path>,
    out_path: Option<&Path>,
) -> Result<DedupReport, PipelineError> {
    let cfg = match config_path {
        Some(path) => DupscanConfig::from_file(path)?.resolve()?,
        None => PipelineConfig::builtin()?,
    };
    let report = run(root, &cfg)?;
    if let Some(path) = out_path {
        write_report(&report, path)?;
    }
    Ok(report)
}
