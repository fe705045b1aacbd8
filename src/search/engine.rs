//! Local ranked search over the in-memory building set.
//!
//! Scans the ordered building list (never the cache map, so iteration
//! order is stable) and matches the query against four fields per
//! building. A single building can contribute several results.

use crate::models::{Building, SearchResult, SearchResultType};
use crate::utils::{cmp_ignore_case, contains_ignore_case};

/// Hard cap on the number of results a single search returns.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Run the multi-field search against `buildings`.
///
/// Matches are ranked by priority (lower is more relevant), ties broken by
/// case-insensitive comparison of the matched text. Blank queries return no
/// results without scanning.
pub fn search_buildings(buildings: &[Building], query: &str) -> Vec<SearchResult> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for building in buildings {
        // Building name
        if contains_ignore_case(&building.name, &term) {
            results.push(SearchResult {
                result_type: SearchResultType::Building,
                building: building.clone(),
                room: None,
                amenity: None,
                match_text: building.name.clone(),
                priority: 1,
            });
        }

        // Building description
        if let Some(ref description) = building.description {
            if contains_ignore_case(description, &term) {
                results.push(SearchResult {
                    result_type: SearchResultType::Building,
                    building: building.clone(),
                    room: None,
                    amenity: None,
                    match_text: description.clone(),
                    priority: 2,
                });
            }
        }

        // Room numbers
        for room in &building.rooms {
            if contains_ignore_case(&room.number, &term) {
                results.push(SearchResult {
                    result_type: SearchResultType::Room,
                    building: building.clone(),
                    room: Some(room.clone()),
                    amenity: None,
                    match_text: format!("Room {}", room.number),
                    priority: 1,
                });
            }
        }

        // Amenities
        for amenity in &building.amenities {
            if contains_ignore_case(amenity, &term) {
                results.push(SearchResult {
                    result_type: SearchResultType::Amenity,
                    building: building.clone(),
                    room: None,
                    amenity: Some(amenity.clone()),
                    match_text: amenity.clone(),
                    priority: 3,
                });
            }
        }
    }

    // Stable sort keeps scan order for full ties, so output is
    // deterministic for a given snapshot
    results.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| cmp_ignore_case(&a.match_text, &b.match_text))
    });
    results.truncate(MAX_SEARCH_RESULTS);
    results
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuildingType, Room, RoomType};

    fn main_building() -> Building {
        Building {
            id: "1".to_string(),
            name: "Главный корпус".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Главный учебный корпус университета".to_string()),
            amenities: vec!["Wi-Fi".to_string(), "Кафе".to_string()],
            rooms: vec![
                Room {
                    number: "101".to_string(),
                    floor: 1,
                    room_type: RoomType::Office,
                    capacity: Some(10),
                    ..Default::default()
                },
                Room {
                    number: "201".to_string(),
                    floor: 2,
                    room_type: RoomType::Auditorium,
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn stadium() -> Building {
        Building {
            id: "C".to_string(),
            name: "Стадион".to_string(),
            building_type: BuildingType::Sports,
            description: Some("Университетский стадион".to_string()),
            amenities: vec!["Футбольное поле".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let buildings = vec![main_building()];
        assert!(search_buildings(&buildings, "").is_empty());
        assert!(search_buildings(&buildings, "   ").is_empty());
        assert!(search_buildings(&buildings, "\t\n").is_empty());
    }

    #[test]
    fn test_room_number_match() {
        let buildings = vec![main_building()];
        let results = search_buildings(&buildings, "101");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].result_type, SearchResultType::Room);
        assert_eq!(results[0].match_text, "Room 101");
        assert_eq!(results[0].priority, 1);
        assert_eq!(results[0].room.as_ref().unwrap().number, "101");
        assert_eq!(results[0].building.id, "1");
    }

    #[test]
    fn test_amenity_match_only() {
        // "кафе" appears in one building's amenities and in no building name
        let buildings = vec![main_building(), stadium()];
        let results = search_buildings(&buildings, "кафе");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].result_type, SearchResultType::Amenity);
        assert_eq!(results[0].amenity.as_deref(), Some("Кафе"));
        assert_eq!(results[0].priority, 3);
    }

    #[test]
    fn test_one_building_contributes_multiple_results() {
        // "корпус" hits both the name and the description of the same building
        let buildings = vec![main_building()];
        let results = search_buildings(&buildings, "корпус");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].priority, 1);
        assert_eq!(results[0].match_text, "Главный корпус");
        assert_eq!(results[1].priority, 2);
        assert_eq!(results[1].match_text, "Главный учебный корпус университета");
    }

    #[test]
    fn test_query_is_trimmed_and_case_folded() {
        let buildings = vec![main_building()];
        let results = search_buildings(&buildings, "  ГЛАВНЫЙ  ");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_sorted_by_priority_then_match_text() {
        let buildings = vec![stadium(), main_building()];
        let results = search_buildings(&buildings, "университет");

        // Both matches are description hits (priority 2), so the tie breaks
        // on the matched text
        assert_eq!(results.len(), 2);
        assert!(results.windows(2).all(|w| {
            w[0].priority < w[1].priority
                || (w[0].priority == w[1].priority && w[0].match_text <= w[1].match_text)
        }));
        assert_eq!(results[0].match_text, "Главный учебный корпус университета");
        assert_eq!(results[1].match_text, "Университетский стадион");
    }

    #[test]
    fn test_results_capped_at_ten() {
        let buildings: Vec<Building> = (0..15)
            .map(|i| Building {
                id: i.to_string(),
                name: format!("Корпус {}", i),
                ..Default::default()
            })
            .collect();

        let results = search_buildings(&buildings, "корпус");
        assert_eq!(results.len(), MAX_SEARCH_RESULTS);
    }

    #[test]
    fn test_deterministic_for_unchanged_snapshot() {
        let buildings = vec![main_building(), stadium()];
        let first = search_buildings(&buildings, "корпус");
        let second = search_buildings(&buildings, "корпус");
        assert_eq!(first, second);
    }
}
