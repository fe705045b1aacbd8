//! Data models for campus map entities.
//!
//! This module contains the data structures shared by the cache, the
//! search engine and the API client:
//!
//! - `Building`, `Room`: campus structures and their sub-units
//! - `SearchResult`: one ranked match produced by a search invocation

pub mod building;
pub mod search;

pub use building::{Building, BuildingType, Coordinates, Room, RoomType};
pub use search::{SearchResult, SearchResultType};
