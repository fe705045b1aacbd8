//! Domain models for campus buildings and their rooms.
//!
//! Field names follow the wire format of the map API, so these types
//! deserialize the `/api/buildings` payloads directly.

use serde::{Deserialize, Serialize};

/// Category of a campus building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Academic,
    Living,
    Sports,
    Dining,
    Administrative,
    #[default]
    Other,
}

impl BuildingType {
    /// Types that appear as filter buckets in the type counts.
    /// `Other` is deliberately absent from the bucket list.
    pub const FILTERABLE: [BuildingType; 5] = [
        BuildingType::Academic,
        BuildingType::Living,
        BuildingType::Sports,
        BuildingType::Dining,
        BuildingType::Administrative,
    ];

    /// Wire value of this type, as used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::Academic => "academic",
            BuildingType::Living => "living",
            BuildingType::Sports => "sports",
            BuildingType::Dining => "dining",
            BuildingType::Administrative => "administrative",
            BuildingType::Other => "other",
        }
    }

    /// Human-readable label for the filter buckets.
    pub fn label(&self) -> &'static str {
        match self {
            BuildingType::Academic => "Учебные",
            BuildingType::Living => "Общежития",
            BuildingType::Sports => "Спортивные",
            BuildingType::Dining => "Питание",
            BuildingType::Administrative => "Административные",
            BuildingType::Other => "Прочие",
        }
    }
}

/// Kind of a room inside a building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Classroom,
    Lab,
    Office,
    Toilet,
    Cafe,
    Library,
    Auditorium,
    #[default]
    Other,
}

/// Position of a building on the campus map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// A room inside a building. Owned by its building; the room number is
/// unique within the building, not globally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Room {
    pub number: String,
    pub floor: i32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
}

/// A campus building. Identity is the `id` string; a building is never
/// mutated in place, only replaced wholesale by a fresh fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Building {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub building_type: BuildingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rooms: Vec<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_elevator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_parking: Option<bool>,
}
