//! Shared fixtures for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Bucharest;

use rbs_rust::api::{Room, RoomId};
use rbs_rust::db::repositories::LocalRepository;
use rbs_rust::db::services;

/// A room with the given availability string, otherwise realistic defaults.
pub fn test_room(availability: &str) -> Room {
    Room {
        id: None,
        name: "Sala Centrală".to_string(),
        description: "Ground-floor conference hall".to_string(),
        sqm: Some(95),
        capacity: Some(35),
        location: "București".to_string(),
        address: "Bd. Unirii 10".to_string(),
        availability: availability.to_string(),
        price_per_hour: Some(140.0),
        amenities: "proiector, videoconferință".to_string(),
        timezone: "Europe/Bucharest".to_string(),
    }
}

/// Store a fresh room with the given availability and return the repository
/// and the room's id.
pub async fn seeded_repository(availability: &str) -> (LocalRepository, RoomId) {
    let repo = LocalRepository::new();
    let id = services::store_room(&repo, &test_room(availability))
        .await
        .expect("fixture room must store");
    (repo, id)
}

/// An instant on 2026-07-`day` at the given Bucharest wall-clock time.
/// 2026-07-13 is a Monday.
pub fn bucharest(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Bucharest
        .with_ymd_and_hms(2026, 7, day, hour, minute, 0)
        .unwrap()
        .with_timezone(&Utc)
}

/// A `now` reference well before every fixture instant.
pub fn fixture_now() -> DateTime<Utc> {
    bucharest(1, 0, 0)
}
