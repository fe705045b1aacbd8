//! Building store - query orchestration and UI-visible state.
//!
//! This module contains the `BuildingStore`, the context object the UI
//! layer drives. It owns the building cache, the transport, and the
//! loading/error/searching state, and coordinates fetches, debounced
//! input and the local-plus-remote search pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::api::BuildingProvider;
use crate::cache::BuildingCache;
use crate::fallback::fallback_buildings;
use crate::models::{Building, BuildingType, SearchResult};
use crate::search::{merge_remote, search_buildings};
use crate::utils::contains_ignore_case;

// ============================================================================
// Constants
// ============================================================================

/// Quiet period for debounced search input.
/// 300ms coalesces fast typing without feeling laggy.
const DEBOUNCE_DELAY_MS: u64 = 300;

/// Suggestions shown before the server list has been loaded.
const DEFAULT_SUGGESTIONS: [&str; 6] = [
    "столовая",
    "библиотека",
    "аудитория 101",
    "туалет",
    "кафе",
    "спортзал",
];

/// Suggestions used when the server list cannot be fetched.
const SUGGESTION_FALLBACK: [&str; 8] = [
    "столовая",
    "библиотека",
    "аудитория 101",
    "туалет",
    "кафе",
    "спортзал",
    "главный корпус",
    "общежитие",
];

// ============================================================================
// UI State Types
// ============================================================================

/// Type filter for the building list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(BuildingType),
}

impl TypeFilter {
    /// Wire value for the server-side `type` parameter.
    /// `All` maps to no parameter at all.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Only(t) => Some(t.as_str()),
        }
    }

    fn matches(&self, building: &Building) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => building.building_type == *t,
        }
    }
}

/// One bucket of the derived per-type building counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Default)]
struct StoreState {
    buildings: Vec<Building>,
    selected: Option<Building>,
    loading: bool,
    error: Option<String>,
    search_query: String,
    selected_type: TypeFilter,
    search_results: Vec<SearchResult>,
    is_searching: bool,
}

// ============================================================================
// Building Store
// ============================================================================

/// Shared store of building data and search state.
///
/// All mutation happens under a single state lock, so a wholesale
/// replacement of the building list is atomic from any reader's point of
/// view. Methods take `&self`; callers share the store through an `Arc`.
///
/// Overlapping invocations resolve by "latest query wins": each search
/// takes a monotonic sequence number and stale completions are discarded
/// instead of overwriting newer results.
pub struct BuildingStore {
    provider: Arc<dyn BuildingProvider>,
    state: RwLock<StoreState>,
    cache: RwLock<BuildingCache>,
    search_seq: AtomicU64,
    debounce_seq: AtomicU64,
}

impl BuildingStore {
    pub fn new(provider: Arc<dyn BuildingProvider>) -> Self {
        Self {
            provider,
            state: RwLock::new(StoreState::default()),
            cache: RwLock::new(BuildingCache::new()),
            search_seq: AtomicU64::new(0),
            debounce_seq: AtomicU64::new(0),
        }
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    pub async fn buildings(&self) -> Vec<Building> {
        self.state.read().await.buildings.clone()
    }

    pub async fn selected_building(&self) -> Option<Building> {
        self.state.read().await.selected.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn search_query(&self) -> String {
        self.state.read().await.search_query.clone()
    }

    pub async fn selected_type(&self) -> TypeFilter {
        self.state.read().await.selected_type
    }

    pub async fn search_results(&self) -> Vec<SearchResult> {
        self.state.read().await.search_results.clone()
    }

    pub async fn is_searching(&self) -> bool {
        self.state.read().await.is_searching
    }

    /// Buildings narrowed by the selected type filter and, for backwards
    /// compatibility with the plain list view, by a name/description
    /// substring match on the current query.
    pub async fn filtered_buildings(&self) -> Vec<Building> {
        let state = self.state.read().await;
        let query = state.search_query.trim().to_lowercase();

        state
            .buildings
            .iter()
            .filter(|b| state.selected_type.matches(b))
            .filter(|b| {
                query.is_empty()
                    || contains_ignore_case(&b.name, &query)
                    || b.description
                        .as_deref()
                        .map(|d| contains_ignore_case(d, &query))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Derived per-type counts: an "all" bucket plus one bucket per
    /// filterable type.
    pub async fn building_types(&self) -> Vec<TypeCount> {
        let state = self.state.read().await;

        let mut counts = vec![TypeCount {
            key: "all",
            label: "Все здания",
            count: state.buildings.len(),
        }];
        for building_type in BuildingType::FILTERABLE {
            counts.push(TypeCount {
                key: building_type.as_str(),
                label: building_type.label(),
                count: state
                    .buildings
                    .iter()
                    .filter(|b| b.building_type == building_type)
                    .count(),
            });
        }
        counts
    }

    // =========================================================================
    // Direct State Operations
    // =========================================================================

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.state.write().await.search_query = query.into();
    }

    pub async fn set_selected_type(&self, filter: TypeFilter) {
        self.state.write().await.selected_type = filter;
    }

    pub async fn select_building(&self, building: Option<Building>) {
        if let Some(ref b) = building {
            debug!(id = %b.id, name = %b.name, "Building selected");
        }
        self.state.write().await.selected = building;
    }

    pub async fn clear_search_results(&self) {
        let mut state = self.state.write().await;
        state.search_results.clear();
        state.is_searching = false;
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        debug!("Building cache cleared");
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetch the full building list, skipped while the cache is fresh
    /// unless `force` is set.
    ///
    /// Transport failure is absorbed per the fallback policy: an empty
    /// building list is seeded from the built-in dataset, a populated one
    /// keeps its stale data; both surface an error string.
    pub async fn fetch_buildings(&self, force: bool) -> Result<()> {
        if !force && self.cache.read().await.is_fresh() {
            debug!("Using cached building data");
            return Ok(());
        }

        let (query, type_param) = {
            let state = self.state.read().await;
            let query = if state.search_query.is_empty() {
                None
            } else {
                Some(state.search_query.clone())
            };
            (query, state.selected_type.as_query())
        };

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let fetched = self
            .provider
            .fetch_buildings(query.as_deref(), type_param)
            .await;

        match fetched {
            Ok(buildings) => {
                info!(count = buildings.len(), "Loaded buildings from server");
                self.cache.write().await.put_all(&buildings);
                let mut state = self.state.write().await;
                state.buildings = buildings;
                state.loading = false;
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch buildings");
                let mut state = self.state.write().await;
                state.error = Some(format!("Ошибка загрузки зданий: {}", e));
                if state.buildings.is_empty() {
                    state.buildings = fallback_buildings();
                    info!(count = state.buildings.len(), "Seeded fallback building data");
                }
                state.loading = false;
            }
        }
        Ok(())
    }

    /// Resolve a single building by id and make it the selection.
    ///
    /// Lookup order: cache, current building list (backfilling the cache),
    /// remote get-by-id, fallback dataset. Only the remote step can fail;
    /// its failure sets the error string and leaves the selection untouched
    /// when the id is absent from the fallback dataset too.
    pub async fn fetch_building(&self, id: &str) -> Result<()> {
        let cached = self.cache.read().await.get(id).cloned();
        if let Some(building) = cached {
            debug!(id, name = %building.name, "Building found in cache");
            self.state.write().await.selected = Some(building);
            return Ok(());
        }

        let existing = {
            let state = self.state.read().await;
            state.buildings.iter().find(|b| b.id == id).cloned()
        };
        if let Some(building) = existing {
            debug!(id, name = %building.name, "Building found in current list");
            self.cache.write().await.put(building.clone());
            self.state.write().await.selected = Some(building);
            return Ok(());
        }

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        match self.provider.fetch_building(id).await {
            Ok(building) => {
                debug!(id, name = %building.name, "Building loaded from server");
                self.cache.write().await.put(building.clone());
                let mut state = self.state.write().await;
                state.selected = Some(building);
                state.loading = false;
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to fetch building");
                let fallback = fallback_buildings().into_iter().find(|b| b.id == id);
                let mut state = self.state.write().await;
                state.error = Some(format!("Ошибка загрузки информации о здании: {}", e));
                if let Some(building) = fallback {
                    info!(id, name = %building.name, "Using fallback data for building");
                    state.selected = Some(building);
                }
                state.loading = false;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Run the full search pipeline for `query`.
    ///
    /// Local results are published as soon as they are computed; the remote
    /// merge republishes only when it changes the set. A blank query clears
    /// the results instead. Completions of superseded invocations are
    /// discarded.
    pub async fn search(&self, query: &str) {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            self.clear_search_results().await;
            return;
        }

        self.state.write().await.is_searching = true;

        // An empty building list always triggers a fetch, regardless of TTL
        if self.state.read().await.buildings.is_empty() {
            debug!("Building list empty, fetching before search");
            if let Err(e) = self.fetch_buildings(false).await {
                error!(error = %e, "Search aborted, building fetch failed");
                let mut state = self.state.write().await;
                if self.is_latest(seq) {
                    state.search_results.clear();
                    state.is_searching = false;
                }
                return;
            }
        }

        let local = {
            let state = self.state.read().await;
            search_buildings(&state.buildings, query)
        };
        debug!(count = local.len(), query, "Local search complete");

        {
            let mut state = self.state.write().await;
            if !self.is_latest(seq) {
                debug!(query, "Search superseded before publishing local results");
                return;
            }
            state.search_results = local.clone();
        }

        let merged = merge_remote(self.provider.as_ref(), local.clone(), query).await;

        let mut state = self.state.write().await;
        if !self.is_latest(seq) {
            debug!(query, "Search superseded, discarding merged results");
            return;
        }
        if merged != local {
            debug!(count = merged.len(), "Republishing merged search results");
            state.search_results = merged;
        }
        state.is_searching = false;
    }

    /// Debounced variant of [`search`](Self::search) with the default
    /// quiet period.
    pub async fn debounced_search(&self, query: &str) {
        self.debounced_search_after(query, Duration::from_millis(DEBOUNCE_DELAY_MS))
            .await;
    }

    /// Wait out the quiet period, then apply `query` and run the unified
    /// search pipeline. A call superseded by a newer one during the wait
    /// does nothing; only the last caller sets the query and fetches.
    pub async fn debounced_search_after(&self, query: &str, delay: Duration) {
        let token = self.debounce_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(delay).await;
        if self.debounce_seq.load(Ordering::SeqCst) != token {
            debug!(query, "Debounced search superseded");
            return;
        }

        self.set_search_query(query).await;
        if let Err(e) = self.fetch_buildings(false).await {
            warn!(error = %e, "Building fetch before debounced search failed");
        }
        self.search(query).await;
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.search_seq.load(Ordering::SeqCst) == seq
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Static suggestion list shown before the server list is available.
    pub fn search_suggestions() -> Vec<String> {
        DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }

    /// Load the suggestion list from the server, falling back to the
    /// built-in list when the request fails.
    pub async fn load_suggestions(&self) -> Vec<String> {
        match self.provider.fetch_suggestions().await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                debug!(error = %e, "Falling back to built-in suggestions");
                SUGGESTION_FALLBACK.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
