/// Corpus loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("pattern {pattern:?} contains {found} `{{term}}` placeholders, expected exactly 1")]
    MissingPlaceholder { pattern: String, found: usize },

    #[error("corpus has no patterns and no trending topics")]
    Empty,

    #[error("unknown language tag {tag:?}")]
    UnknownLanguage { tag: String },

    #[error("unsupported corpus file extension {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("failed to read corpus file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse corpus TOML")]
    Toml(#[from] toml::de::Error),
}
