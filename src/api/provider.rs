use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Building, SearchResult};

/// Transport boundary consumed by the building store.
///
/// `ApiClient` is the production implementation; tests drive the store
/// through stub providers. The store never talks to the network directly.
#[async_trait]
pub trait BuildingProvider: Send + Sync {
    /// Fetch the full building list, optionally filtered server-side by a
    /// query string and/or a building type.
    async fn fetch_buildings(
        &self,
        query: Option<&str>,
        building_type: Option<&str>,
    ) -> Result<Vec<Building>>;

    /// Fetch a single building by id.
    async fn fetch_building(&self, id: &str) -> Result<Building>;

    /// Server-side search, returning at most `limit` ranked results.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>>;

    /// Fetch the search suggestion strings.
    async fn fetch_suggestions(&self) -> Result<Vec<String>>;
}
