//! # Room Booking Service Backend
//!
//! Validation core and storage layer for a room booking system.
//!
//! Room owners declare a weekly opening schedule as free-form text
//! ("Luni-Vineri 09:00-18:00, Sâmbătă 10:00-14:00"); users submit booking
//! requests as absolute instant ranges. This crate parses the schedule text,
//! decides civil-calendar-aware whether a candidate booking fits the
//! declared open hours, and guards against conflicts with already-confirmed
//! bookings. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Schedule Grammar**: Parse Romanian-locale weekly schedules, with a
//!   canonical round-trip formatter for normalized previews
//! - **Civil Calendar Resolution**: DST-aware instant-to-weekday/time
//!   mapping through the tz database, in the room's locale timezone
//! - **Availability Validation**: Half-open containment of a booking within
//!   the declared windows, including multi-day spans
//! - **Conflict Detection**: Timezone-agnostic overlap checks over absolute
//!   instants
//! - **Atomic Admission**: The store re-checks overlaps and inserts under a
//!   single exclusion scope, closing the check-then-act race
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Core domain types shared across layers
//! - [`models`]: Weekday, time-of-day and window primitives
//! - [`schedule`]: Schedule grammar parser and canonical formatter
//! - [`civil`]: Civil calendar resolution (the only chrono-weekday boundary)
//! - [`booking`]: Pure validation core (availability + overlap)
//! - [`db`]: Repository pattern, service layer and persistence
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod booking;
pub mod civil;
pub mod db;
pub mod models;
pub mod schedule;

#[cfg(feature = "http-server")]
pub mod http;
