use serde::{Deserialize, Serialize};

/// Raw metadata for one scanned document.
///
/// Created during the scan and never mutated afterward. The `heading` field
/// is the text of the first `<h1>`, falling back to the first `<h2>` when no
/// `<h1>` is present, matching what the generators actually emit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Stable identity: the directory name under the corpus root.
    pub id: String,
    /// Raw `<title>` text.
    pub title: String,
    /// Raw first-level heading text.
    pub heading: String,
    /// Raw `<meta name="description">` content.
    pub description: String,
    /// Size of the source file in bytes.
    pub bytes: usize,
}

/// Result of scanning a corpus root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Documents admitted to the comparison set, sorted by id.
    pub documents: Vec<Document>,
    /// Directories with no readable/parseable index document, sorted.
    pub skipped: Vec<String>,
    /// Directories whose index document is a forwarding-only stub, sorted.
    pub redirect_stubs: Vec<String>,
}
