//! Repository trait definitions for the booking store.
//!
//! The traits abstract the hosted document store the original system talked
//! to, so the service layer works against any backend. The key contract is
//! [`BookingRepository::create_booking_if_free`]: the overlap re-check and
//! the insert happen atomically inside the store, which closes the
//! check-then-act race between two concurrent admissions for the same room.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::api::{BookingAdmission, BookingId, ConfirmedBooking, Room, RoomId};

/// Room persistence operations.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a room. Assigns a fresh id when the room has none; returns
    /// the id under which the room is stored.
    async fn store_room(&self, room: &Room) -> RepositoryResult<RoomId>;

    /// Fetch a room by id.
    async fn get_room(&self, id: &RoomId) -> RepositoryResult<Room>;

    /// List all rooms.
    async fn list_rooms(&self) -> RepositoryResult<Vec<Room>>;

    /// Delete a room and all of its bookings.
    async fn delete_room(&self, id: &RoomId) -> RepositoryResult<()>;
}

/// Booking persistence operations.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All confirmed bookings for one room.
    async fn list_bookings(&self, room_id: &RoomId) -> RepositoryResult<Vec<ConfirmedBooking>>;

    /// Atomically admit a booking: re-check the candidate range against the
    /// room's confirmed bookings and insert it only when free.
    ///
    /// Implementations MUST perform the check and the insert under a single
    /// exclusion scope (lock, transaction or storage constraint) so that of
    /// two concurrent overlapping candidates exactly one is created and the
    /// other observes [`BookingAdmission::Conflict`].
    async fn create_booking_if_free(
        &self,
        room_id: &RoomId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<BookingAdmission>;

    /// Fetch one booking by id.
    async fn get_booking(&self, id: &BookingId) -> RepositoryResult<ConfirmedBooking>;

    /// Cancel (delete) a booking. The only way a confirmed booking goes away.
    async fn cancel_booking(&self, id: &BookingId) -> RepositoryResult<()>;
}

/// Umbrella trait for a complete store backend.
#[async_trait]
pub trait FullRepository: RoomRepository + BookingRepository {
    /// Whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
