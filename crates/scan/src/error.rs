//! Error types produced by the corpus scanner.
//!
//! The scanner distinguishes fatal failures (the whole run must abort with
//! no report) from per-document failures, which are recovered by skipping
//! and counting the document. Only the fatal cases appear here; a document
//! that cannot be read or parsed never surfaces as an error, it lands in
//! [`ScanOutcome::skipped`](crate::ScanOutcome).

use std::path::PathBuf;

use thiserror::Error;

/// Fatal scanner failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// The scan configuration failed validation at startup.
    #[error("invalid scan config: {0}")]
    InvalidConfig(String),

    /// The corpus root could not be opened for enumeration.
    #[error("corpus root {path} is not readable: {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O failure while enumerating corpus entries. Enumeration errors are
    /// fatal: a partially enumerated corpus would produce a report that looks
    /// complete but is not.
    #[error("i/o failure while enumerating corpus: {0}")]
    Enumerate(std::io::Error),

    /// The stage exceeded its configured wall-clock budget.
    #[error("scan exceeded wall-clock budget of {budget_secs}s")]
    Timeout { budget_secs: u64 },
}
