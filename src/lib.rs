//! Core library for the campus map client.
//!
//! This crate owns the data and logic behind the map UI: it fetches the
//! building list from the map API, caches it in memory with a 5-minute
//! freshness window, runs a ranked multi-field search (building name,
//! description, room number, amenity) over the cached set and augments the
//! local results with server-side search results when the backend answers
//! in time. The UI layer owns presentation and drives the [`BuildingStore`]
//! through its action surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod fallback;
pub mod models;
pub mod search;
pub mod store;
pub mod utils;

pub use api::{ApiClient, ApiError, BuildingProvider};
pub use cache::BuildingCache;
pub use config::Config;
pub use models::{
    Building, BuildingType, Coordinates, Room, RoomType, SearchResult, SearchResultType,
};
pub use search::{merge_remote, search_buildings, MAX_SEARCH_RESULTS};
pub use store::{BuildingStore, TypeCount, TypeFilter};
