//! Built-in building dataset used when the map API is unreachable.
//!
//! The list mirrors the campus data served by the backend so the client
//! stays usable offline. Seeded into the store only when a full fetch
//! fails against an empty building list; a failed refresh of an already
//! populated store keeps the stale data instead.

use crate::models::{Building, BuildingType, Room, RoomType};

fn room(
    number: &str,
    floor: i32,
    room_type: RoomType,
    capacity: Option<u32>,
    equipment: &[&str],
    accessible: bool,
) -> Room {
    Room {
        number: number.to_string(),
        floor,
        room_type,
        capacity,
        equipment: equipment.iter().map(|s| s.to_string()).collect(),
        accessible: Some(accessible),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The fixed fallback dataset of 13 campus buildings.
pub fn fallback_buildings() -> Vec<Building> {
    vec![
        Building {
            id: "1".to_string(),
            name: "Главный корпус".to_string(),
            building_type: BuildingType::Academic,
            description: Some(
                "Главный учебный корпус университета с административными службами".to_string(),
            ),
            floor_count: Some(4),
            year_built: Some(1916),
            departments: strings(&["Ректорат", "Приемная комиссия", "Деканаты"]),
            amenities: strings(&["Wi-Fi", "Кафе", "Банкомат", "Медпункт", "Библиотека"]),
            accessible: Some(true),
            has_elevator: Some(true),
            has_parking: Some(true),
            rooms: vec![
                room("101", 1, RoomType::Office, Some(10), &["Компьютер", "Проектор"], true),
                room("102", 1, RoomType::Classroom, Some(30), &["Доска", "Проектор"], true),
                room("103", 1, RoomType::Toilet, None, &[], true),
                room(
                    "201",
                    2,
                    RoomType::Auditorium,
                    Some(100),
                    &["Микрофоны", "Проектор", "Звуковая система"],
                    false,
                ),
                room("202", 2, RoomType::Library, Some(50), &["Wi-Fi", "Компьютеры"], true),
            ],
            ..Default::default()
        },
        Building {
            id: "3".to_string(),
            name: "Корпус 3".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Учебный корпус с аудиториями и лабораториями".to_string()),
            floor_count: Some(4),
            year_built: Some(1975),
            departments: strings(&["Физический факультет", "Математический факультет"]),
            amenities: strings(&["Лаборатории", "Компьютерные классы", "Wi-Fi"]),
            ..Default::default()
        },
        Building {
            id: "4".to_string(),
            name: "Корпус 4".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Современный учебный корпус".to_string()),
            floor_count: Some(5),
            year_built: Some(1985),
            departments: strings(&["Химический факультет", "Биологический факультет"]),
            amenities: strings(&["Лаборатории", "Аудитории", "Библиотека"]),
            ..Default::default()
        },
        Building {
            id: "6".to_string(),
            name: "Корпус 6".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Гуманитарный корпус".to_string()),
            floor_count: Some(3),
            year_built: Some(1980),
            departments: strings(&["Филологический факультет", "Исторический факультет"]),
            amenities: strings(&["Аудитории", "Конференц-залы", "Wi-Fi"]),
            ..Default::default()
        },
        Building {
            id: "7".to_string(),
            name: "Корпус 7".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Корпус факультета вычислительной техники".to_string()),
            floor_count: Some(4),
            year_built: Some(1990),
            departments: strings(&["Экономический факультет", "Юридический факультет"]),
            amenities: strings(&["Аудитории", "Компьютерные классы", "Мультимедиа"]),
            ..Default::default()
        },
        Building {
            id: "8".to_string(),
            name: "Корпус 8".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Новый учебный корпус".to_string()),
            floor_count: Some(6),
            year_built: Some(2005),
            departments: strings(&["IT факультет", "Инженерный факультет"]),
            amenities: strings(&["Современные аудитории", "IT лаборатории", "Коворкинг"]),
            ..Default::default()
        },
        Building {
            id: "О-1".to_string(),
            name: "Общежитие №1".to_string(),
            building_type: BuildingType::Living,
            description: Some("Студенческое общежитие для первокурсников".to_string()),
            floor_count: Some(9),
            year_built: Some(1970),
            amenities: strings(&["Прачечная", "Кухня", "Комната отдыха", "Интернет", "Охрана"]),
            ..Default::default()
        },
        Building {
            id: "О-2".to_string(),
            name: "Общежитие №2".to_string(),
            building_type: BuildingType::Living,
            description: Some("Общежитие для студентов старших курсов".to_string()),
            floor_count: Some(9),
            year_built: Some(1975),
            amenities: strings(&["Прачечная", "Кухня", "Спортзал", "Интернет"]),
            ..Default::default()
        },
        Building {
            id: "О-4".to_string(),
            name: "Общежитие №4".to_string(),
            building_type: BuildingType::Living,
            description: Some("Общежитие семейного типа".to_string()),
            floor_count: Some(5),
            year_built: Some(1985),
            amenities: strings(&["Детская площадка", "Прачечная", "Кухня", "Парковка"]),
            ..Default::default()
        },
        Building {
            id: "О-5".to_string(),
            name: "Общежитие №5".to_string(),
            building_type: BuildingType::Living,
            description: Some("Современное общежитие".to_string()),
            floor_count: Some(12),
            year_built: Some(2000),
            amenities: strings(&["Фитнес-зал", "Кафе", "Прачечная", "Wi-Fi", "Лифты"]),
            ..Default::default()
        },
        Building {
            id: "C".to_string(),
            name: "Стадион".to_string(),
            building_type: BuildingType::Sports,
            description: Some("Университетский стадион для занятий спортом".to_string()),
            floor_count: Some(1),
            year_built: Some(1965),
            amenities: strings(&["Футбольное поле", "Беговые дорожки", "Трибуны", "Раздевалки"]),
            ..Default::default()
        },
        Building {
            id: "СК".to_string(),
            name: "Спорт Кафедра".to_string(),
            building_type: BuildingType::Academic,
            description: Some("Кафедра физической культуры и спорта".to_string()),
            floor_count: Some(2),
            year_built: Some(1980),
            departments: strings(&["Кафедра физической культуры"]),
            amenities: strings(&["Спортзалы", "Тренажеры", "Медкабинет"]),
            ..Default::default()
        },
        Building {
            id: "D".to_string(),
            name: "Столовая".to_string(),
            building_type: BuildingType::Dining,
            description: Some("Главная столовая университета".to_string()),
            floor_count: Some(2),
            year_built: Some(1960),
            amenities: strings(&["Горячее питание", "Буфет", "Кафе", "Летняя терраса"]),
            ..Default::default()
        },
    ]
}
