//! Report assembly, serialization, and atomic output.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use cluster::{ClusterCategory, ClusterOutcome};
use matcher::MatchTier;
use scan::ScanOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// One matched pair inside a group, in report shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupEdge {
    pub a: String,
    pub b: String,
    pub tier: MatchTier,
    pub reasons: Vec<String>,
}

/// One duplicate group up for human review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupReport {
    pub members: Vec<String>,
    pub category: ClusterCategory,
    pub edges: Vec<GroupEdge>,
}

/// Corpus-level roll-up of the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub translation_pair_groups: usize,
    pub functional_groups: usize,
    pub documents_in_groups: usize,
    /// One keeper per group: Σ(size - 1).
    pub potential_removals: usize,
    pub unique_after_cleanup: usize,
}

/// The structured report: counters plus the ordered duplicate groups.
///
/// Fully deterministic for a fixed corpus and configuration; groups, their
/// members, and their edges arrive already canonically sorted from the
/// clusterer, so two runs serialize byte-identically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DedupReport {
    pub scanned: usize,
    pub skipped: usize,
    pub redirect_stubs: usize,
    pub singletons: usize,
    pub summary: ReportSummary,
    pub groups: Vec<GroupReport>,
}

/// Assemble the report from the scan and clustering outcomes.
pub fn build_report(scan_outcome: &ScanOutcome, clusters: &ClusterOutcome) -> DedupReport {
    let groups: Vec<GroupReport> = clusters
        .clusters
        .iter()
        .map(|cluster| GroupReport {
            members: cluster.members.clone(),
            category: cluster.category,
            edges: cluster
                .edges
                .iter()
                .map(|edge| GroupEdge {
                    a: edge.a.clone(),
                    b: edge.b.clone(),
                    tier: edge.tier,
                    reasons: edge.reasons.clone(),
                })
                .collect(),
        })
        .collect();

    let translation_pair_groups = groups
        .iter()
        .filter(|g| g.category == ClusterCategory::TranslationPair)
        .count();
    let documents_in_groups: usize = groups.iter().map(|g| g.members.len()).sum();
    let potential_removals: usize = groups.iter().map(|g| g.members.len() - 1).sum();
    let scanned = scan_outcome.documents.len();

    DedupReport {
        scanned,
        skipped: scan_outcome.skipped.len(),
        redirect_stubs: scan_outcome.redirect_stubs.len(),
        singletons: clusters.singletons,
        summary: ReportSummary {
            translation_pair_groups,
            functional_groups: groups.len() - translation_pair_groups,
            documents_in_groups,
            potential_removals,
            unique_after_cleanup: scanned - potential_removals,
        },
        groups,
    }
}

/// Write the report as pretty JSON, atomically: serialize to a sibling
/// temporary file, then rename over the target. An interrupted run leaves
/// either the previous report or none, never a truncated one.
pub fn write_report(report: &DedupReport, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_vec_pretty(report)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Human-readable rendering: translation pairs first, then functional
/// duplicates with their match evidence, then the roll-up.
pub fn render_text(report: &DedupReport) -> String {
    let rule = "=".repeat(72);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  DUPLICATE DOCUMENT REPORT");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  Documents scanned:      {}", report.scanned);
    let _ = writeln!(out, "  Skipped (no metadata):  {}", report.skipped);
    let _ = writeln!(out, "  Redirect stubs:         {}", report.redirect_stubs);

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "  SECTION A: TRANSLATION PAIRS");
    let _ = writeln!(out, "  Same document in two languages. Keep one, redirect the other.");
    let _ = writeln!(out, "{rule}");
    let mut index = 0usize;
    for group in &report.groups {
        if group.category != ClusterCategory::TranslationPair {
            continue;
        }
        index += 1;
        render_group(&mut out, index, group);
    }
    let _ = writeln!(out, "\n  Total translation pairs: {}", report.summary.translation_pair_groups);

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "  SECTION B: FUNCTIONAL DUPLICATES");
    let _ = writeln!(out, "  Documents serving the same purpose. Review each for merging.");
    let _ = writeln!(out, "{rule}");
    index = 0;
    for group in &report.groups {
        if group.category != ClusterCategory::FunctionalDuplicate {
            continue;
        }
        index += 1;
        render_group(&mut out, index, group);
    }
    let _ = writeln!(out, "\n  Total functional duplicate groups: {}", report.summary.functional_groups);

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "  FINAL SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  Documents in duplicate groups:  {}", report.summary.documents_in_groups);
    let _ = writeln!(out, "  Potential removals:             {}", report.summary.potential_removals);
    let _ = writeln!(out, "  Unique documents after cleanup: {}", report.summary.unique_after_cleanup);
    let _ = writeln!(out, "{rule}");
    out
}

fn render_group(out: &mut String, index: usize, group: &GroupReport) {
    if group.members.len() == 2 {
        let _ = writeln!(out, "\n  {index}. {}  <-->  {}", group.members[0], group.members[1]);
    } else {
        let _ = writeln!(out, "\n  {index}. Group of {}:", group.members.len());
        for member in &group.members {
            let _ = writeln!(out, "     - {member}");
        }
    }
    for edge in &group.edges {
        let _ = writeln!(
            out,
            "     {} <-> {} [{}]: {}",
            edge.a,
            edge.b,
            edge.tier,
            edge.reasons.join("; ")
        );
    }
}

#[cfg(test)]
mod tests {
    use scan::Document;

    use super::*;

    fn sample_report() -> DedupReport {
        let scan_outcome = ScanOutcome {
            documents: vec![
                Document {
                    id: "agua-soberana".into(),
                    title: "Agua Soberana".into(),
                    heading: "Agua".into(),
                    description: String::new(),
                    bytes: 1200,
                },
                Document {
                    id: "sovereign-water".into(),
                    title: "Sovereign Water".into(),
                    heading: "Water".into(),
                    description: String::new(),
                    bytes: 1300,
                },
                Document {
                    id: "vpn-soberana".into(),
                    title: "VPN".into(),
                    heading: "VPN".into(),
                    description: String::new(),
                    bytes: 900,
                },
            ],
            skipped: vec!["empty-dir".into()],
            redirect_stubs: vec!["old-water".into()],
        };
        let profiles: Vec<matcher::DocumentProfile> = scan_outcome
            .documents
            .iter()
            .map(|d| matcher::DocumentProfile {
                id: d.id.clone(),
                name: if d.id == "vpn-soberana" {
                    ["vpn".to_string()].into_iter().collect()
                } else {
                    ["water".to_string()].into_iter().collect()
                },
                title: Default::default(),
                heading: Default::default(),
                description: Default::default(),
            })
            .collect();
        let edges = matcher::compare_all(&profiles, &matcher::MatchConfig::default())
            .expect("comparison should succeed");
        let ids: Vec<String> = profiles.iter().map(|p| p.id.clone()).collect();
        let clusters = cluster::build_clusters(&ids, &edges, &cluster::ClusterConfig::default())
            .expect("clustering should succeed");
        build_report(&scan_outcome, &clusters)
    }

    #[test]
    fn counters_and_summary_line_up() {
        let report = sample_report();
        assert_eq!(report.scanned, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.redirect_stubs, 1);
        assert_eq!(report.singletons, 1);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.summary.translation_pair_groups, 1);
        assert_eq!(report.summary.functional_groups, 0);
        assert_eq!(report.summary.potential_removals, 1);
        assert_eq!(report.summary.unique_after_cleanup, 2);
    }

    #[test]
    fn json_shape_matches_the_report_contract() {
        let report = sample_report();
        let value = serde_json::to_value(&report).expect("report should serialize");
        let group = &value["groups"][0];
        assert_eq!(group["category"], "TRANSLATION_PAIR");
        assert_eq!(group["members"][0], "agua-soberana");
        let edge = &group["edges"][0];
        assert_eq!(edge["tier"], "TRANSLATION");
        assert_eq!(edge["reasons"][0], "name match 100% (bilingual pair)");
    }

    #[test]
    fn write_report_is_atomic_and_readable_back() {
        let report = sample_report();
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("report.json");
        write_report(&report, &path).expect("report should be written");
        assert!(!path.with_extension("json.tmp").exists());
        let loaded: DedupReport = serde_json::from_slice(
            &std::fs::read(&path).expect("report file should exist"),
        )
        .expect("report should parse back");
        assert_eq!(loaded, report);
    }

    #[test]
    fn text_rendering_lists_both_sections() {
        let report = sample_report();
        let text = render_text(&report);
        assert!(text.contains("SECTION A: TRANSLATION PAIRS"));
        assert!(text.contains("agua-soberana  <-->  sovereign-water"));
        assert!(text.contains("SECTION B: FUNCTIONAL DUPLICATES"));
        assert!(text.contains("name match 100% (bilingual pair)"));
    }
}
