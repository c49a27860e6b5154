//! Configuration types for the corpus scanner.
//!
//! [`ScanConfig`] controls how the corpus root is enumerated, which
//! directories are excluded outright, and how redirect stubs are detected.
//! It is cheap to clone and serializable so it can be embedded in a
//! higher-level YAML pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Runtime configuration for a corpus scan.
///
/// The exclusion list and redirect-stub rules are data, not code: they are
/// expected to arrive from an external configuration file so a corpus can be
/// re-scanned with different rules without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Configuration schema version. Must be >= 1; any change to scan
    /// behavior that affects which documents enter the comparison set must
    /// bump this version.
    #[serde(default = "ScanConfig::default_version")]
    pub version: u32,

    /// File name each candidate directory must contain to count as a
    /// document.
    #[serde(default = "ScanConfig::default_index_file_name")]
    pub index_file_name: String,

    /// Directory names excluded outright (never scanned, never counted).
    #[serde(default)]
    pub exclude_dirs: Vec<String>,

    /// Directory name prefixes excluded outright.
    #[serde(default)]
    pub exclude_prefixes: Vec<String>,

    /// Byte-size ceiling under which a document is checked for redirect
    /// markers. Documents at or above this size are never treated as stubs.
    #[serde(default = "ScanConfig::default_redirect_stub_max_bytes")]
    pub redirect_stub_max_bytes: usize,

    /// Marker substrings (matched case-insensitively) that identify a
    /// forwarding-only document. A small file containing any marker is
    /// excluded from comparison and counted as a redirect stub.
    #[serde(default = "ScanConfig::default_redirect_markers")]
    pub redirect_markers: Vec<String>,

    /// Optional hard wall-clock budget for the scan stage, in seconds.
    /// Checked cooperatively between enumeration and extraction phases.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Run per-document metadata extraction on a rayon worker pool. Each
    /// document is independent and write-once, so the outcome is identical
    /// with this on or off.
    #[serde(default = "ScanConfig::default_use_parallel")]
    pub use_parallel: bool,
}

impl ScanConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_index_file_name() -> String {
        "index.html".to_string()
    }

    pub(crate) fn default_redirect_stub_max_bytes() -> usize {
        500
    }

    pub(crate) fn default_redirect_markers() -> Vec<String> {
        vec![
            "window.location".to_string(),
            "meta http-equiv".to_string(),
        ]
    }

    pub(crate) fn default_use_parallel() -> bool {
        true
    }

    /// Validate the configuration. Called at startup, before any I/O.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.version == 0 {
            return Err(ScanError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        if self.index_file_name.trim().is_empty() {
            return Err(ScanError::InvalidConfig(
                "index_file_name must not be empty".to_string(),
            ));
        }
        if self.redirect_stub_max_bytes == 0 {
            return Err(ScanError::InvalidConfig(
                "redirect_stub_max_bytes must be greater than zero".to_string(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(ScanError::InvalidConfig(
                "timeout_secs must be greater than zero when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            index_file_name: Self::default_index_file_name(),
            exclude_dirs: Vec::new(),
            exclude_prefixes: Vec::new(),
            redirect_stub_max_bytes: Self::default_redirect_stub_max_bytes(),
            redirect_markers: Self::default_redirect_markers(),
            timeout_secs: None,
            use_parallel: Self::default_use_parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ScanConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.index_file_name, "index.html");
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = ScanConfig {
            version: 0,
            ..ScanConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(matches!(err, ScanError::InvalidConfig(msg) if msg.contains("version")));
    }

    #[test]
    fn empty_index_file_name_rejected() {
        let cfg = ScanConfig {
            index_file_name: "  ".to_string(),
            ..ScanConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(matches!(err, ScanError::InvalidConfig(msg) if msg.contains("index_file_name")));
    }
}
