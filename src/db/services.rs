//! High-level business logic over any repository implementation.
//!
//! These functions orchestrate the pure booking core (schedule parsing,
//! availability validation) with the store: fetch the room, validate the
//! candidate against its declared schedule, then hand the final say to the
//! store's atomic check-and-insert. The service layer never splits that last
//! check from the write, so it adds no race of its own on top of the store's
//! exclusion guarantee.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::api::{
    AvailabilityWindow, BookingAdmission, BookingId, BookingRequest, ConfirmedBooking, Room,
    RoomId,
};
use crate::booking::availability::{self, RejectionReason};
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::schedule;

/// Result of a full admission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// Both checks passed; the booking is persisted.
    Admitted(ConfirmedBooking),
    /// One of the two admission rules rejected the candidate.
    Rejected(AdmissionRejection),
}

impl AdmissionOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionOutcome::Admitted(_))
    }
}

/// Which rule rejected the candidate: the declared schedule or an existing
/// booking. Ordinary rejections, returned as values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionRejection {
    Schedule(RejectionReason),
    Conflict { existing: BookingId },
}

impl AdmissionRejection {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionRejection::Schedule(reason) => reason.code(),
            AdmissionRejection::Conflict { .. } => "overlap",
        }
    }
}

impl fmt::Display for AdmissionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionRejection::Schedule(reason) => reason.fmt(f),
            AdmissionRejection::Conflict { .. } => {
                write!(f, "the room is already booked for the selected time")
            }
        }
    }
}

/// Normalized rendering of a room's declared schedule, for UI previews.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchedulePreview {
    pub room_id: RoomId,
    /// Canonical re-rendering of the parsed schedule; empty when the room
    /// declares no restriction.
    pub normalized: String,
    pub windows: Vec<AvailabilityWindow>,
    /// One message per clause the lenient parser had to skip.
    pub warnings: Vec<String>,
}

fn parse_room_schedule(room: &Room) -> (Vec<AvailabilityWindow>, Vec<String>) {
    let outcome = schedule::parse(&room.availability);
    let warnings: Vec<String> = outcome
        .skipped
        .iter()
        .map(|s| format!("skipped availability clause '{}': {}", s.clause, s.error))
        .collect();
    for warning in &warnings {
        log::warn!(
            "room {}: {}",
            room.id.as_ref().map(|id| id.value()).unwrap_or("<new>"),
            warning
        );
    }
    (outcome.windows, warnings)
}

fn room_timezone(room: &Room) -> RepositoryResult<chrono_tz::Tz> {
    room.locale_timezone().map_err(|e| {
        RepositoryError::validation(e).with_operation("admit_booking")
    })
}

/// Run the full admission flow for a candidate booking.
///
/// Steps: fetch the room, parse its schedule leniently (skipped clauses are
/// logged), validate the candidate range against the schedule in the room's
/// locale timezone (including the `now` past-start check), then let the
/// store atomically re-check overlaps and persist. Schedule and conflict
/// rejections are ordinary [`AdmissionOutcome::Rejected`] values; only store
/// failures surface as errors.
pub async fn admit_booking(
    repo: &dyn FullRepository,
    request: &BookingRequest,
    now: DateTime<Utc>,
) -> RepositoryResult<AdmissionOutcome> {
    let room = repo.get_room(&request.room_id).await?;
    let tz = room_timezone(&room)?;
    let (windows, _) = parse_room_schedule(&room);

    match availability::validate(request.start, request.end, tz, &windows, Some(now)) {
        availability::Decision::Rejected(reason) => {
            return Ok(AdmissionOutcome::Rejected(AdmissionRejection::Schedule(
                reason,
            )));
        }
        availability::Decision::Accepted => {}
    }

    match repo
        .create_booking_if_free(&request.room_id, request.start, request.end)
        .await?
    {
        BookingAdmission::Created(booking) => Ok(AdmissionOutcome::Admitted(booking)),
        BookingAdmission::Conflict { existing } => Ok(AdmissionOutcome::Rejected(
            AdmissionRejection::Conflict { existing },
        )),
    }
}

/// Parse and canonically re-render a room's schedule for display.
pub async fn schedule_preview(
    repo: &dyn FullRepository,
    room_id: &RoomId,
) -> RepositoryResult<SchedulePreview> {
    let room = repo.get_room(room_id).await?;
    let (windows, warnings) = parse_room_schedule(&room);
    Ok(SchedulePreview {
        room_id: room_id.clone(),
        normalized: schedule::format_schedule(&windows),
        windows,
        warnings,
    })
}

/// Persist a room, logging any availability clauses that fail to parse.
pub async fn store_room(repo: &dyn FullRepository, room: &Room) -> RepositoryResult<RoomId> {
    let _ = parse_room_schedule(room);
    repo.store_room(room).await
}

/// Fetch a room by id.
pub async fn get_room(repo: &dyn FullRepository, room_id: &RoomId) -> RepositoryResult<Room> {
    repo.get_room(room_id).await
}

/// List all rooms.
pub async fn list_rooms(repo: &dyn FullRepository) -> RepositoryResult<Vec<Room>> {
    repo.list_rooms().await
}

/// Delete a room and its bookings.
pub async fn delete_room(repo: &dyn FullRepository, room_id: &RoomId) -> RepositoryResult<()> {
    repo.delete_room(room_id).await
}

/// List one room's confirmed bookings.
pub async fn list_room_bookings(
    repo: &dyn FullRepository,
    room_id: &RoomId,
) -> RepositoryResult<Vec<ConfirmedBooking>> {
    repo.list_bookings(room_id).await
}

/// Cancel a booking by id.
pub async fn cancel_booking(
    repo: &dyn FullRepository,
    booking_id: &BookingId,
) -> RepositoryResult<()> {
    repo.cancel_booking(booking_id).await
}

/// Whether the backing store is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
