//! Merge of local search results with server-side results.
//!
//! The remote call is strictly best-effort: local results are published
//! before the merge is attempted, and every remote failure mode collapses
//! to "keep the local results" without surfacing an error.

use std::time::Duration;

use tracing::debug;

use crate::api::BuildingProvider;
use crate::models::SearchResult;

use super::engine::MAX_SEARCH_RESULTS;

/// Remote search must answer within this bound or the local results stand.
const REMOTE_SEARCH_TIMEOUT_SECS: u64 = 2;

/// Augment `local` with server-side results for `query`.
///
/// Remote results are appended only when no existing entry (local or
/// already appended) shares the same (building id, result type) pair;
/// distinct rooms or amenities of one building collapse to the first seen.
/// The combined list is re-capped at `MAX_SEARCH_RESULTS`.
pub async fn merge_remote(
    provider: &dyn BuildingProvider,
    local: Vec<SearchResult>,
    query: &str,
) -> Vec<SearchResult> {
    let request = provider.search(query, MAX_SEARCH_RESULTS);
    let remote = match tokio::time::timeout(
        Duration::from_secs(REMOTE_SEARCH_TIMEOUT_SECS),
        request,
    )
    .await
    {
        Ok(Ok(results)) => results,
        Ok(Err(e)) => {
            debug!(error = %e, "Remote search unavailable, keeping local results");
            return local;
        }
        Err(_) => {
            debug!(query, "Remote search timed out, keeping local results");
            return local;
        }
    };

    let mut combined = local;
    for result in remote {
        let duplicate = combined.iter().any(|existing| {
            existing.building.id == result.building.id
                && existing.result_type == result.result_type
        });
        if !duplicate {
            combined.push(result);
        }
    }
    combined.truncate(MAX_SEARCH_RESULTS);
    combined
}

// ============================================================================
// Tests
// ============================================================================
