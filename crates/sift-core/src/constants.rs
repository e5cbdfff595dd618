/// Sift system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder every term pattern must contain exactly once.
pub const TERM_PLACEHOLDER: &str = "{term}";

/// Upper bound the consuming UI applies to requested counts.
/// The engine itself accepts any non-negative count.
pub const UI_MAX_COUNT: usize = 10_000;
