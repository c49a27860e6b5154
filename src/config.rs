//! YAML configuration file support for the dupscan pipeline.
//!
//! One file defines every stage (scan, normalize, matcher, cluster) plus the
//! lexicon resource to load. All validation happens here, at startup, before
//! any scanning begins; a malformed dictionary or invalid classifier
//! threshold never survives into a run.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "soberano corpus"
//!
//! scan:
//!   version: 1
//!   index_file_name: "index.html"
//!   exclude_dirs: [shared, icons, screenshots]
//!   exclude_prefixes: ["nexus-"]
//!   redirect_stub_max_bytes: 500
//!   timeout_secs: 120
//!
//! lexicon_path: "config/lexicon.yaml"
//!
//! matcher:
//!   version: 1
//!   translation_name_score: 1.0
//!   strong_name_score: 0.5
//!
//! cluster:
//!   version: 1
//!   translated_prefixes: ["sovereign-"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cluster::{ClusterConfig, ClusterError};
use matcher::{MatchConfig, MatchError};
use normalize::{Lexicon, LexiconError};
use scan::{ScanConfig, ScanError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lexicon resource, compiled in so a bare `dupscan <root>` works.
/// Still a data file: edit `config/lexicon.yaml` and rebuild, or point
/// `lexicon_path` at a replacement to swap it without a rebuild.
const BUILTIN_LEXICON: &str = include_str!("../config/lexicon.yaml");

/// Errors that can occur when loading the pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

impl From<ScanError> for ConfigLoadError {
    fn from(value: ScanError) -> Self {
        ConfigLoadError::Validation(value.to_string())
    }
}

impl From<MatchError> for ConfigLoadError {
    fn from(value: MatchError) -> Self {
        ConfigLoadError::Validation(value.to_string())
    }
}

impl From<ClusterError> for ConfigLoadError {
    fn from(value: ClusterError) -> Self {
        ConfigLoadError::Validation(value.to_string())
    }
}

/// Top-level YAML configuration for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DupscanConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Scanner stage configuration.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Path to the lexicon resource. When omitted, the bundled
    /// `config/lexicon.yaml` is used.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Classifier thresholds.
    #[serde(default)]
    pub matcher: MatchConfig,

    /// Clustering/categorization configuration.
    #[serde(default)]
    pub cluster: ClusterConfig,
}

impl DupscanConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DupscanConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration without loading the lexicon.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
        self.scan.validate()?;
        self.matcher.validate()?;
        self.cluster.validate()?;
        Ok(())
    }

    /// Load the lexicon and produce the resolved per-stage configuration
    /// bundle the pipeline runs with.
    pub fn resolve(self) -> Result<PipelineConfig, ConfigLoadError> {
        self.validate()?;
        let lexicon = match &self.lexicon_path {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::from_yaml(BUILTIN_LEXICON)?,
        };
        Ok(PipelineConfig {
            scan: self.scan,
            lexicon,
            matcher: self.matcher,
            cluster: self.cluster,
        })
    }
}

impl Default for DupscanConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            scan: ScanConfig::default(),
            lexicon_path: None,
            matcher: MatchConfig::default(),
            cluster: ClusterConfig::default(),
        }
    }
}

/// Fully resolved configuration: every stage config validated and the
/// lexicon loaded. Passed explicitly into every component; nothing in the
/// pipeline reads ambient or global state.
#[derive(Debug)]
pub struct PipelineConfig {
    pub scan: ScanConfig,
    pub lexicon: Lexicon,
    pub matcher: MatchConfig,
    pub cluster: ClusterConfig,
}

impl PipelineConfig {
    /// Defaults plus the bundled lexicon.
    pub fn builtin() -> Result<Self, ConfigLoadError> {
        DupscanConfig::default().resolve()
    }
}
