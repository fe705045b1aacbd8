//! In-memory caching module for building data.
//!
//! This module provides the `BuildingCache`, a key-value store of buildings
//! keyed by id with a single process-wide freshness window. The cached set
//! is considered stale 5 minutes after the last full fetch and is
//! invalidated wholesale, never per entry.

pub mod buildings;

pub use buildings::BuildingCache;
