use thiserror::Error;

/// Errors raised while loading or validating a [`Lexicon`](crate::Lexicon).
///
/// All of these are startup-time configuration failures; once a lexicon is
/// built, normalization itself is a pure function that cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse lexicon YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("invalid lexicon: {0}")]
    Validation(String),

    #[error("invalid lexicon pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}
