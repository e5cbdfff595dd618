//! Load a user-supplied corpus from a TOML or JSON file.

use std::path::Path;

use sift_core::errors::CorpusError;
use sift_core::models::Corpus;
use tracing::debug;

/// Load and validate a corpus file. The format is chosen by extension:
/// `.toml` or `.json`.
pub fn load_from_path(path: &Path) -> Result<Corpus, CorpusError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let raw = std::fs::read_to_string(path)?;
    let corpus: Corpus = match extension.as_str() {
        "toml" => toml::from_str(&raw)?,
        "json" => serde_json::from_str(&raw)?,
        other => {
            return Err(CorpusError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    corpus.validate()?;
    debug!(
        path = %path.display(),
        patterns = corpus.patterns.len(),
        topics = corpus.trending_topics.len(),
        "loaded corpus file"
    );
    Ok(corpus)
}
