use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which interaction caused a suggestion to be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Copy,
    Search,
}

/// Opaque suggestion identifier: a high-resolution timestamp component
/// plus a random component, both base-36. Unique within any realistic
/// single-session batch size; not globally unique across processes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionId(String);

impl SuggestionId {
    /// Mint a fresh identifier. Never reused within a process.
    pub fn generate() -> Self {
        let micros = Utc::now().timestamp_micros().unsigned_abs();
        let salt: u64 = rand::thread_rng().gen();
        Self(format!("{}-{}", base36(micros), base36(salt)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.reverse();
    out.into_iter().collect()
}

/// A generated search suggestion.
///
/// The generator never mutates a suggestion after creation; the
/// opened/opened_at/action_type fields belong to the consuming layer
/// and flip at most once via [`Suggestion::open`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    /// Generated text, unique within its owning batch by construction.
    pub text: String,
    /// Whether the user clicked/copied this suggestion.
    pub opened: bool,
    /// Set on the first transition to opened.
    pub opened_at: Option<DateTime<Utc>>,
    /// Which interaction caused the open.
    pub action_type: Option<ActionType>,
}

impl Suggestion {
    /// Create a fresh, unopened suggestion with a newly minted id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: SuggestionId::generate(),
            text: text.into(),
            opened: false,
            opened_at: None,
            action_type: None,
        }
    }

    /// Record the first open. Subsequent calls are no-ops so the
    /// opened/opened_at/action_type triple flips exactly once.
    pub fn open(&mut self, action: ActionType) {
        if self.opened {
            return;
        }
        self.opened = true;
        self.opened_at = Some(Utc::now());
        self.action_type = Some(action);
    }
}
