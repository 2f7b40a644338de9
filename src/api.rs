//! Public API surface for the booking backend.
//!
//! This file consolidates the core domain types shared by the repository
//! layer, the service layer and the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::models::{AvailabilityWindow, TimeOfDay, Weekday};

/// Room identifier (document key in the booking store).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

/// Booking identifier, minted by the store on admission.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

impl RoomId {
    pub fn new(value: impl Into<String>) -> Self {
        RoomId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        RoomId(uuid::Uuid::new_v4().to_string())
    }
}

impl BookingId {
    pub fn new(value: impl Into<String>) -> Self {
        BookingId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        BookingId(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}
impl From<BookingId> for String {
    fn from(id: BookingId) -> Self {
        id.0
    }
}

fn default_timezone() -> String {
    "Europe/Bucharest".to_string()
}

/// A bookable room as stored by the room repository.
///
/// `availability` is the owner's raw weekly schedule text; it is parsed on
/// demand and never stored in structured form, so the owner's original
/// wording survives edits elsewhere in the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoomId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    /// Raw weekly opening schedule, e.g. "Luni-Vineri 09:00-18:00".
    /// Empty means no restriction.
    #[serde(default)]
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub amenities: String,
    /// The room's fixed locale timezone (IANA name). The declared schedule
    /// is always interpreted in this zone, regardless of who is booking.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Room {
    /// Parse the room's locale timezone name into a tz-database zone.
    pub fn locale_timezone(&self) -> Result<chrono_tz::Tz, String> {
        self.timezone
            .parse()
            .map_err(|_| format!("Unknown timezone '{}'", self.timezone))
    }
}

/// A candidate booking, as produced by the presentation layer.
///
/// Instants are absolute; the caller guarantees start < end, which the
/// availability validator re-checks anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A persisted booking. Immutable once created; it disappears only through
/// explicit cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedBooking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Result of the store's atomic check-and-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAdmission {
    /// The range was free; the booking is now persisted.
    Created(ConfirmedBooking),
    /// The range overlaps an existing booking for the same room.
    Conflict { existing: BookingId },
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
