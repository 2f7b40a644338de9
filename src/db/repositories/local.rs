//! In-memory repository implementation.
//!
//! Backs the default development and test configuration. Rooms and bookings
//! live in process memory behind `parking_lot` locks; nothing survives a
//! restart.
//!
//! The admission path holds the booking table's write lock across the
//! overlap re-check and the insert, which is this backend's exclusion scope:
//! of two concurrent overlapping admissions for the same room, exactly one
//! can win.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::api::{BookingAdmission, BookingId, ConfirmedBooking, Room, RoomId};
use crate::booking::overlap;
use crate::db::repository::{
    BookingRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    RoomRepository,
};

/// In-memory store for rooms and their bookings.
#[derive(Default)]
pub struct LocalRepository {
    rooms: RwLock<HashMap<String, Room>>,
    /// Bookings per room id. The write lock is the admission exclusion scope.
    bookings: RwLock<HashMap<String, Vec<ConfirmedBooking>>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn room_not_found(id: &RoomId, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Room '{}' does not exist", id),
            ErrorContext::new(operation)
                .with_entity("room")
                .with_entity_id(id),
        )
    }

    fn booking_not_found(id: &BookingId, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Booking '{}' does not exist", id),
            ErrorContext::new(operation)
                .with_entity("booking")
                .with_entity_id(id),
        )
    }
}

#[async_trait]
impl RoomRepository for LocalRepository {
    async fn store_room(&self, room: &Room) -> RepositoryResult<RoomId> {
        if room.name.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Room name must not be empty",
                ErrorContext::new("store_room").with_entity("room"),
            ));
        }
        let id = room.id.clone().unwrap_or_else(RoomId::generate);
        let mut stored = room.clone();
        stored.id = Some(id.clone());
        self.rooms.write().insert(id.value().to_string(), stored);
        Ok(id)
    }

    async fn get_room(&self, id: &RoomId) -> RepositoryResult<Room> {
        self.rooms
            .read()
            .get(id.value())
            .cloned()
            .ok_or_else(|| Self::room_not_found(id, "get_room"))
    }

    async fn list_rooms(&self) -> RepositoryResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self.rooms.read().values().cloned().collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }

    async fn delete_room(&self, id: &RoomId) -> RepositoryResult<()> {
        let removed = self.rooms.write().remove(id.value());
        if removed.is_none() {
            return Err(Self::room_not_found(id, "delete_room"));
        }
        self.bookings.write().remove(id.value());
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn list_bookings(&self, room_id: &RoomId) -> RepositoryResult<Vec<ConfirmedBooking>> {
        if !self.rooms.read().contains_key(room_id.value()) {
            return Err(Self::room_not_found(room_id, "list_bookings"));
        }
        let mut bookings = self
            .bookings
            .read()
            .get(room_id.value())
            .cloned()
            .unwrap_or_default();
        bookings.sort_by_key(|b| b.start);
        Ok(bookings)
    }

    async fn create_booking_if_free(
        &self,
        room_id: &RoomId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<BookingAdmission> {
        if end <= start {
            return Err(RepositoryError::validation_with_context(
                "Booking end must come after its start",
                ErrorContext::new("create_booking_if_free")
                    .with_entity("booking")
                    .with_details(format!("start={}, end={}", start, end)),
            ));
        }
        if !self.rooms.read().contains_key(room_id.value()) {
            return Err(Self::room_not_found(room_id, "create_booking_if_free"));
        }

        // Exclusion scope: the overlap re-check and the insert happen under
        // one write lock, so a concurrent admission for the same range sees
        // either nothing or the committed booking, never the gap in between.
        let mut table = self.bookings.write();
        let room_bookings = table.entry(room_id.value().to_string()).or_default();
        if let Some(existing) = overlap::find_conflict(start, end, room_bookings) {
            return Ok(BookingAdmission::Conflict {
                existing: existing.id.clone(),
            });
        }
        let booking = ConfirmedBooking {
            id: BookingId::generate(),
            room_id: room_id.clone(),
            start,
            end,
        };
        room_bookings.push(booking.clone());
        Ok(BookingAdmission::Created(booking))
    }

    async fn get_booking(&self, id: &BookingId) -> RepositoryResult<ConfirmedBooking> {
        self.bookings
            .read()
            .values()
            .flatten()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| Self::booking_not_found(id, "get_booking"))
    }

    async fn cancel_booking(&self, id: &BookingId) -> RepositoryResult<()> {
        let mut table = self.bookings.write();
        for bookings in table.values_mut() {
            if let Some(pos) = bookings.iter().position(|b| &b.id == id) {
                bookings.remove(pos);
                return Ok(());
            }
        }
        Err(Self::booking_not_found(id, "cancel_booking"))
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn room(name: &str) -> Room {
        Room {
            id: None,
            name: name.to_string(),
            description: String::new(),
            sqm: None,
            capacity: Some(10),
            location: String::new(),
            address: String::new(),
            availability: "Luni-Vineri 09:00-18:00".to_string(),
            price_per_hour: Some(100.0),
            amenities: String::new(),
            timezone: "Europe/Bucharest".to_string(),
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 13, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_store_room_assigns_id() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();
        let fetched = repo.get_room(&id).await.unwrap();
        assert_eq!(fetched.id, Some(id));
        assert_eq!(fetched.name, "Sala 1");
    }

    #[tokio::test]
    async fn test_store_room_rejects_blank_name() {
        let repo = LocalRepository::new();
        let result = repo.store_room(&room("   ")).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ValidationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_missing_room_is_not_found() {
        let repo = LocalRepository::new();
        let result = repo.get_room(&RoomId::new("nope")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_booking_then_conflict() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();

        let first = repo
            .create_booking_if_free(&id, at(9), at(11))
            .await
            .unwrap();
        let created = match first {
            BookingAdmission::Created(b) => b,
            other => panic!("expected Created, got {:?}", other),
        };

        let second = repo
            .create_booking_if_free(&id, at(10), at(12))
            .await
            .unwrap();
        match second {
            BookingAdmission::Conflict { existing } => assert_eq!(existing, created.id),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_back_to_back_bookings_both_succeed() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();
        for (s, e) in [(9, 11), (11, 13)] {
            let admission = repo.create_booking_if_free(&id, at(s), at(e)).await.unwrap();
            assert!(matches!(admission, BookingAdmission::Created(_)));
        }
        assert_eq!(repo.list_bookings(&id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bookings_are_isolated_per_room() {
        let repo = LocalRepository::new();
        let a = repo.store_room(&room("Sala A")).await.unwrap();
        let b = repo.store_room(&room("Sala B")).await.unwrap();

        repo.create_booking_if_free(&a, at(9), at(11)).await.unwrap();
        // Same range in another room does not conflict.
        let admission = repo.create_booking_if_free(&b, at(9), at(11)).await.unwrap();
        assert!(matches!(admission, BookingAdmission::Created(_)));
        assert_eq!(repo.list_bookings(&b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_booking_frees_the_range() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();
        let created = match repo.create_booking_if_free(&id, at(9), at(11)).await.unwrap() {
            BookingAdmission::Created(b) => b,
            other => panic!("expected Created, got {:?}", other),
        };

        repo.cancel_booking(&created.id).await.unwrap();
        let again = repo.create_booking_if_free(&id, at(9), at(11)).await.unwrap();
        assert!(matches!(again, BookingAdmission::Created(_)));
    }

    #[tokio::test]
    async fn test_cancel_unknown_booking_is_not_found() {
        let repo = LocalRepository::new();
        let result = repo.cancel_booking(&BookingId::new("ghost")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_room_drops_its_bookings() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();
        repo.create_booking_if_free(&id, at(9), at(11)).await.unwrap();

        repo.delete_room(&id).await.unwrap();
        assert!(repo.get_room(&id).await.is_err());
        assert!(repo.list_bookings(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_create_booking_rejects_inverted_range() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();
        let result = repo.create_booking_if_free(&id, at(11), at(9)).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ValidationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_bookings_sorted_by_start() {
        let repo = LocalRepository::new();
        let id = repo.store_room(&room("Sala 1")).await.unwrap();
        repo.create_booking_if_free(&id, at(14), at(15)).await.unwrap();
        repo.create_booking_if_free(&id, at(9), at(10)).await.unwrap();

        let bookings = repo.list_bookings(&id).await.unwrap();
        assert!(bookings[0].start < bookings[1].start);
    }
}
