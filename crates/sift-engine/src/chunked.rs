//! Cooperative chunk assembly for large batches.
//!
//! Generation happens eagerly in one pass; chunking only affects when
//! the caller observes the full result. Between chunks the task yields
//! back to the runtime so an interactive host stays responsive. There
//! is no cancellation and no partial-result streaming: the resolved
//! value is always the complete batch, and superseded results are
//! discarded by the caller.

use sift_core::config::GeneratorConfig;
use sift_core::models::Suggestion;
use tracing::trace;

/// Reassemble a fully generated batch chunk by chunk, yielding between
/// chunks. Counts at or below the threshold resolve immediately.
pub(crate) async fn assemble(
    config: &GeneratorConfig,
    batch: Vec<Suggestion>,
    count: usize,
) -> Vec<Suggestion> {
    if count <= config.chunk_threshold {
        return batch;
    }

    let chunk_size = config.chunk_size.max(1);
    let mut remaining = batch;
    let mut result = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let take = remaining.len().min(chunk_size);
        result.extend(remaining.drain(..take));
        if !remaining.is_empty() {
            trace!(assembled = result.len(), "yielding between chunks");
            tokio::task::yield_now().await;
        }
    }

    result.truncate(count);
    result
}
