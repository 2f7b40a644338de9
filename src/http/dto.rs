//! Data Transfer Objects for the HTTP API.
//!
//! Thin request/response wrappers over the domain types in [`crate::api`].
//! Instants travel as RFC 3339 strings via chrono's serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{AvailabilityWindow, ConfirmedBooking, Room, RoomId};
use crate::db::services::SchedulePreview;

/// GET /health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// POST /v1/rooms request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sqm: Option<u32>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    /// Raw weekly schedule text, e.g. "Luni-Vineri 09:00-18:00".
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub amenities: String,
    /// IANA timezone name; defaults to the room locale used by the original
    /// deployment.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<CreateRoomRequest> for Room {
    fn from(request: CreateRoomRequest) -> Self {
        Room {
            id: None,
            name: request.name,
            description: request.description,
            sqm: request.sqm,
            capacity: request.capacity,
            location: request.location,
            address: request.address,
            availability: request.availability,
            price_per_hour: request.price_per_hour,
            amenities: request.amenities,
            timezone: request
                .timezone
                .unwrap_or_else(|| "Europe/Bucharest".to_string()),
        }
    }
}

/// POST /v1/rooms response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub id: RoomId,
}

/// GET /v1/rooms response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<Room>,
    pub total: usize,
}

/// GET /v1/rooms/{id}/availability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityPreviewResponse {
    pub room_id: RoomId,
    /// Canonical rendering of the parsed schedule; empty when the room
    /// declares no restriction.
    pub normalized: String,
    pub windows: Vec<AvailabilityWindow>,
    /// One warning per availability clause the parser had to skip.
    pub warnings: Vec<String>,
}

impl From<SchedulePreview> for AvailabilityPreviewResponse {
    fn from(preview: SchedulePreview) -> Self {
        Self {
            room_id: preview.room_id,
            normalized: preview.normalized,
            windows: preview.windows,
            warnings: preview.warnings,
        }
    }
}

/// POST /v1/rooms/{id}/bookings request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// POST /v1/rooms/{id}/bookings success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking: ConfirmedBooking,
}

/// GET /v1/rooms/{id}/bookings response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<ConfirmedBooking>,
    pub total: usize,
}
