//! Search result model shared by the local engine and the remote search API.

use serde::{Deserialize, Serialize};

use super::building::{Building, Room};

/// What a search result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Building,
    Room,
    Amenity,
}

/// One ranked search match. Constructed per search invocation, never
/// persisted. `priority` ranks relevance, lower is more relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: SearchResultType,
    pub building: Building,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenity: Option<String>,
    #[serde(rename = "matchText")]
    pub match_text: String,
    pub priority: u8,
}
