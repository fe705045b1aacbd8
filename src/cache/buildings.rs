//! In-memory building cache keyed by building id.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::Building;

/// Consider the cached building set stale after 5 minutes.
const CACHE_TTL_MINUTES: i64 = 5;

/// Key-value store of buildings with a single freshness window.
///
/// Invalidation is wholesale: either the whole set is fresh or the whole
/// set is stale. Individual entries never expire on their own and there is
/// no size bound; the fetch orchestrator decides when to refill.
#[derive(Debug, Clone)]
pub struct BuildingCache {
    entries: HashMap<String, Building>,
    last_fetch: DateTime<Utc>,
}

impl Default for BuildingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            // Epoch start guarantees the first freshness check fails
            last_fetch: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// True iff a non-empty building set exists and the freshness window
    /// has not elapsed since the last full fetch.
    pub fn is_fresh(&self) -> bool {
        !self.entries.is_empty()
            && Utc::now() - self.last_fetch < Duration::minutes(CACHE_TTL_MINUTES)
    }

    pub fn get(&self, id: &str) -> Option<&Building> {
        self.entries.get(id)
    }

    /// Insert or overwrite a single building under its id.
    /// Does not touch the freshness window.
    pub fn put(&mut self, building: Building) {
        self.entries.insert(building.id.clone(), building);
    }

    /// Replace the whole mapping with a freshly fetched set and restart
    /// the freshness window.
    pub fn put_all(&mut self, buildings: &[Building]) {
        self.entries = buildings
            .iter()
            .map(|b| (b.id.clone(), b.clone()))
            .collect();
        self.last_fetch = Utc::now();
        debug!(count = self.entries.len(), "Building cache replaced");
    }

    /// Empty the mapping and reset the freshness window to the epoch so the
    /// next freshness check fails.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_fetch = DateTime::<Utc>::UNIX_EPOCH;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn building(id: &str, name: &str) -> Building {
        Building {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_cache_is_not_fresh() {
        let cache = BuildingCache::new();
        assert!(!cache.is_fresh());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_fresh_after_put_all() {
        let mut cache = BuildingCache::new();
        cache.put_all(&[building("1", "Главный корпус")]);
        assert!(cache.is_fresh());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("1").map(|b| b.name.as_str()), Some("Главный корпус"));
    }

    #[test]
    fn test_put_does_not_start_freshness_window() {
        let mut cache = BuildingCache::new();
        cache.put(building("1", "Главный корпус"));
        // A single insert makes the entry visible but the set stays stale
        assert!(cache.get("1").is_some());
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_put_all_replaces_wholesale() {
        let mut cache = BuildingCache::new();
        cache.put_all(&[building("1", "Главный корпус"), building("3", "Корпус 3")]);
        cache.put_all(&[building("D", "Столовая")]);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("1").is_none());
        assert!(cache.get("D").is_some());
    }

    #[test]
    fn test_clear_invalidates_even_with_prior_data() {
        let mut cache = BuildingCache::new();
        cache.put_all(&[building("1", "Главный корпус")]);
        assert!(cache.is_fresh());

        cache.clear();
        assert!(!cache.is_fresh());
        assert!(cache.get("1").is_none());

        // A new put_all restores freshness
        cache.put_all(&[building("1", "Главный корпус")]);
        assert!(cache.is_fresh());
    }

    #[test]
    fn test_stale_after_ttl_elapses() {
        let mut cache = BuildingCache::new();
        cache.put_all(&[building("1", "Главный корпус")]);
        cache.last_fetch = Utc::now() - Duration::minutes(CACHE_TTL_MINUTES + 1);
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_still_fresh_just_inside_ttl() {
        let mut cache = BuildingCache::new();
        cache.put_all(&[building("1", "Главный корпус")]);
        cache.last_fetch = Utc::now() - Duration::minutes(CACHE_TTL_MINUTES - 1);
        assert!(cache.is_fresh());
    }
}
