use crate::api::{BookingId, BookingRequest, ConfirmedBooking, Room, RoomId};
use chrono::{TimeZone, Utc};

fn test_room() -> Room {
    Room {
        id: Some(RoomId::new("room-1")),
        name: "Sala Mare".to_string(),
        description: "Conference hall".to_string(),
        sqm: Some(120),
        capacity: Some(40),
        location: "Cluj-Napoca".to_string(),
        address: "Str. Memorandumului 28".to_string(),
        availability: "Luni-Vineri 09:00-18:00".to_string(),
        price_per_hour: Some(150.0),
        amenities: "proiector, tablă".to_string(),
        timezone: "Europe/Bucharest".to_string(),
    }
}

#[test]
fn test_room_id_value() {
    let id = RoomId::new("abc");
    assert_eq!(id.value(), "abc");
    assert_eq!(id.to_string(), "abc");
}

#[test]
fn test_booking_id_equality() {
    let id1 = BookingId::new("b-1");
    let id2 = BookingId::new("b-1");
    let id3 = BookingId::new("b-2");
    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn test_generated_ids_are_unique() {
    assert_ne!(BookingId::generate(), BookingId::generate());
    assert_ne!(RoomId::generate(), RoomId::generate());
}

#[test]
fn test_room_locale_timezone() {
    let room = test_room();
    assert_eq!(room.locale_timezone().unwrap(), chrono_tz::Europe::Bucharest);
}

#[test]
fn test_room_rejects_unknown_timezone() {
    let mut room = test_room();
    room.timezone = "Mars/Olympus_Mons".to_string();
    assert!(room.locale_timezone().is_err());
}

#[test]
fn test_room_deserialize_defaults_timezone() {
    let room: Room = serde_json::from_str(r#"{"name": "Sala Mică"}"#).unwrap();
    assert_eq!(room.timezone, "Europe/Bucharest");
    assert!(room.availability.is_empty());
    assert!(room.id.is_none());
}

#[test]
fn test_room_serde_roundtrip() {
    let room = test_room();
    let json = serde_json::to_string(&room).unwrap();
    let back: Room = serde_json::from_str(&json).unwrap();
    assert_eq!(room, back);
}

#[test]
fn test_booking_serde_roundtrip() {
    let booking = ConfirmedBooking {
        id: BookingId::new("b-1"),
        room_id: RoomId::new("room-1"),
        start: Utc.with_ymd_and_hms(2026, 7, 13, 7, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 7, 13, 9, 0, 0).unwrap(),
    };
    let json = serde_json::to_string(&booking).unwrap();
    let back: ConfirmedBooking = serde_json::from_str(&json).unwrap();
    assert_eq!(booking, back);
}

#[test]
fn test_booking_request_instants_are_absolute() {
    let request = BookingRequest {
        room_id: RoomId::new("room-1"),
        start: Utc.with_ymd_and_hms(2026, 7, 13, 7, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 7, 13, 9, 0, 0).unwrap(),
    };
    assert!(request.start < request.end);
}
