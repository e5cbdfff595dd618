use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sift_core::errors::CorpusError;

/// Languages with a built-in corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Pt,
    Ru,
    Ja,
    Zh,
    Ar,
    Hi,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
        Language::Ru,
        Language::Ja,
        Language::Zh,
        Language::Ar,
        Language::Hi,
    ];

    /// Two-letter tag for this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ar => "ar",
            Language::Hi => "hi",
        }
    }

    /// Lenient parse: unknown tags fall back silently to English, the
    /// behavior the engine contract requires at the corpus boundary.
    pub fn parse_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            "pt" => Ok(Language::Pt),
            "ru" => Ok(Language::Ru),
            "ja" => Ok(Language::Ja),
            "zh" => Ok(Language::Zh),
            "ar" => Ok(Language::Ar),
            "hi" => Ok(Language::Hi),
            other => Err(CorpusError::UnknownLanguage {
                tag: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
