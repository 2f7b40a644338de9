//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::dto::{
    AvailabilityPreviewResponse, BookingListResponse, BookingResponse, CreateBookingRequest,
    CreateRoomRequest, CreateRoomResponse, HealthResponse, RoomListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BookingId, BookingRequest, Room, RoomId};
use crate::db::services as db_services;
use crate::db::services::AdmissionOutcome;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Room CRUD
// =============================================================================

/// GET /v1/rooms
///
/// List all rooms in the store.
pub async fn list_rooms(State(state): State<AppState>) -> HandlerResult<RoomListResponse> {
    let rooms = db_services::list_rooms(state.repository.as_ref()).await?;
    let total = rooms.len();
    Ok(Json(RoomListResponse { rooms, total }))
}

/// POST /v1/rooms
///
/// Create a new room. The availability string is accepted as-is; clauses
/// that fail to parse are logged and surfaced later by the preview endpoint.
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateRoomResponse>), AppError> {
    let room: Room = request.into();
    let id = db_services::store_room(state.repository.as_ref(), &room).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreateRoomResponse { id }),
    ))
}

/// GET /v1/rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> HandlerResult<Room> {
    let room = db_services::get_room(state.repository.as_ref(), &RoomId::new(room_id)).await?;
    Ok(Json(room))
}

/// DELETE /v1/rooms/{room_id}
pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<axum::http::StatusCode, AppError> {
    db_services::delete_room(state.repository.as_ref(), &RoomId::new(room_id)).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

// =============================================================================
// Availability
// =============================================================================

/// GET /v1/rooms/{room_id}/availability
///
/// Normalized preview of the room's declared schedule, with warnings for
/// any clause the parser skipped.
pub async fn get_availability(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> HandlerResult<AvailabilityPreviewResponse> {
    let preview =
        db_services::schedule_preview(state.repository.as_ref(), &RoomId::new(room_id)).await?;
    Ok(Json(preview.into()))
}

// =============================================================================
// Bookings
// =============================================================================

/// GET /v1/rooms/{room_id}/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> HandlerResult<BookingListResponse> {
    let bookings =
        db_services::list_room_bookings(state.repository.as_ref(), &RoomId::new(room_id)).await?;
    let total = bookings.len();
    Ok(Json(BookingListResponse { bookings, total }))
}

/// POST /v1/rooms/{room_id}/bookings
///
/// Run the full admission flow: schedule validation in the room's locale
/// timezone, then the store's atomic overlap check. A schedule rejection
/// maps to 422, an overlap to 409.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(axum::http::StatusCode, Json<BookingResponse>), AppError> {
    if request.end <= request.start {
        return Err(AppError::BadRequest(
            "Booking end must come after its start".to_string(),
        ));
    }

    let booking_request = BookingRequest {
        room_id: RoomId::new(room_id),
        start: request.start,
        end: request.end,
    };

    let outcome = db_services::admit_booking(
        state.repository.as_ref(),
        &booking_request,
        Utc::now(),
    )
    .await?;

    match outcome {
        AdmissionOutcome::Admitted(booking) => Ok((
            axum::http::StatusCode::CREATED,
            Json(BookingResponse { booking }),
        )),
        AdmissionOutcome::Rejected(rejection) => Err(AppError::Rejected(rejection)),
    }
}

/// DELETE /v1/bookings/{booking_id}
///
/// Cancel a booking. The only way a confirmed booking is removed.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<axum::http::StatusCode, AppError> {
    db_services::cancel_booking(state.repository.as_ref(), &BookingId::new(booking_id)).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
