//! Corpus scanner.
//!
//! This is where documents enter the dedup pipeline. We enumerate the corpus
//! root (one subdirectory per document), apply the configured exclusion
//! rules, throw out redirect stubs, and pull lightweight metadata out of each
//! remaining page.
//!
//! ## What we do here
//!
//! - **Enumerate deterministically** - immediate subdirectories of the root,
//!   visited in sorted order so two scans of the same tree agree byte for
//!   byte.
//! - **Exclude early** - exact names and prefixes from config never reach
//!   extraction.
//! - **Detect redirect stubs** - small forwarding-only pages are counted and
//!   dropped before comparison.
//! - **Extract tolerantly** - a best-effort tag scanner collects title,
//!   heading, and description; a page we cannot read is skipped and counted,
//!   never fatal.
//! - **Log everything** - structured logs via tracing, success and failure.
//!
//! Fatal errors are reserved for the cases where a partial result would be
//! silently wrong: unreadable root, enumeration I/O failure, and the
//! wall-clock budget.

use std::fs;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn, Level};

mod config;
mod error;
mod extract;
mod types;

pub use crate::config::ScanConfig;
pub use crate::error::ScanError;
pub use crate::extract::{extract_page_meta, is_redirect_stub, PageMeta};
pub use crate::types::{Document, ScanOutcome};

/// Per-candidate extraction result; folded into [`ScanOutcome`] in order.
enum Candidate {
    Admitted(Box<Document>),
    Skipped(String),
    RedirectStub(String),
}

/// Scan a corpus root and return the admitted documents plus skip counters.
pub fn scan(root: &Path, cfg: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    cfg.validate()?;

    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "scan.corpus", root = %root.display());
    let _guard = span.enter();

    let entries = fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(ScanError::Enumerate)?;
        let is_dir = entry.file_type().map_err(ScanError::Enumerate)?.is_dir();
        if !is_dir {
            continue;
        }
        // Non-UTF-8 directory names cannot be stable ids; skip them outright.
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    names.retain(|name| !is_excluded(name, cfg));

    check_budget(start, cfg)?;

    let classify = |name: &String| -> Candidate {
        let index_path = root.join(name).join(&cfg.index_file_name);
        let raw = match fs::read(&index_path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(doc_id = %name, error = %err, "document_unreadable");
                return Candidate::Skipped(name.clone());
            }
        };
        let bytes = raw.len();
        let html = String::from_utf8_lossy(&raw);
        if is_redirect_stub(&html, cfg) {
            return Candidate::RedirectStub(name.clone());
        }
        let meta = extract_page_meta(&html);
        Candidate::Admitted(Box::new(Document {
            id: name.clone(),
            title: meta.title.clone(),
            heading: meta.heading().to_string(),
            description: meta.description,
            bytes,
        }))
    };

    let candidates: Vec<Candidate> = if cfg.use_parallel {
        names.par_iter().map(classify).collect()
    } else {
        names.iter().map(classify).collect()
    };

    check_budget(start, cfg)?;

    let mut outcome = ScanOutcome {
        documents: Vec::with_capacity(candidates.len()),
        skipped: Vec::new(),
        redirect_stubs: Vec::new(),
    };
    for candidate in candidates {
        match candidate {
            Candidate::Admitted(doc) => outcome.documents.push(*doc),
            Candidate::Skipped(id) => outcome.skipped.push(id),
            Candidate::RedirectStub(id) => outcome.redirect_stubs.push(id),
        }
    }

    info!(
        scanned = outcome.documents.len(),
        skipped = outcome.skipped.len(),
        redirect_stubs = outcome.redirect_stubs.len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "scan_complete"
    );
    Ok(outcome)
}

fn is_excluded(name: &str, cfg: &ScanConfig) -> bool {
    cfg.exclude_dirs.iter().any(|d| d == name)
        || cfg
            .exclude_prefixes
            .iter()
            .any(|p| !p.is_empty() && name.starts_with(p.as_str()))
}

fn check_budget(start: Instant, cfg: &ScanConfig) -> Result<(), ScanError> {
    if let Some(budget_secs) = cfg.timeout_secs {
        if start.elapsed().as_secs() >= budget_secs {
            return Err(ScanError::Timeout { budget_secs });
        }
    }
    Ok(())
}
