//! Accumulator enforcing batch-local text uniqueness.

use std::collections::HashSet;

use sift_core::models::Suggestion;

/// Collects suggestions while rejecting duplicate texts. Uniqueness is
/// scoped to one generation call: the seen-set starts from whatever the
/// caller excludes (empty for fresh batches, the on-screen texts for
/// incremental growth) and grows with every accepted item.
pub(crate) struct UniqueBatch {
    items: Vec<Suggestion>,
    seen: HashSet<String>,
}

impl UniqueBatch {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Start with texts that must never be produced again (incremental
    /// growth against an existing batch).
    pub(crate) fn excluding<'a>(capacity: usize, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let mut batch = Self::new(capacity);
        batch.seen.extend(existing.into_iter().map(str::to_string));
        batch
    }

    /// Number of accepted items (excluded texts do not count).
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Accept `text` if it has not been seen in this call. Returns
    /// whether a suggestion was created.
    pub(crate) fn try_push(&mut self, text: String) -> bool {
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.items.push(Suggestion::new(text));
        true
    }

    /// Finish, truncating to the requested count. A shorter batch is a
    /// soft cap under corpus exhaustion, not an error.
    pub(crate) fn into_items(mut self, count: usize) -> Vec<Suggestion> {
        self.items.truncate(count);
        self.items
    }
}
