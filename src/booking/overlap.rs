//! Conflict detection between booking instant-ranges.
//!
//! Works purely on absolute instants; civil-calendar subtleties never reach
//! this module. Intervals are half-open, so a booking that ends exactly when
//! another starts is not a conflict.

use chrono::{DateTime, Utc};

use crate::api::ConfirmedBooking;

/// Whether the half-open instant ranges [s1, e1) and [s2, e2) overlap.
pub fn ranges_overlap(
    s1: DateTime<Utc>,
    e1: DateTime<Utc>,
    s2: DateTime<Utc>,
    e2: DateTime<Utc>,
) -> bool {
    s1 < e2 && e1 > s2
}

/// The first existing booking the candidate range conflicts with, if any.
pub fn find_conflict<'a>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    existing: &'a [ConfirmedBooking],
) -> Option<&'a ConfirmedBooking> {
    existing
        .iter()
        .find(|b| ranges_overlap(start, end, b.start, b.end))
}

/// Whether the candidate range conflicts with any existing booking.
pub fn has_conflict(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    existing: &[ConfirmedBooking],
) -> bool {
    find_conflict(start, end, existing).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BookingId, RoomId};
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 13, hour, minute, 0).unwrap()
    }

    fn booking(start: DateTime<Utc>, end: DateTime<Utc>) -> ConfirmedBooking {
        ConfirmedBooking {
            id: BookingId::new("existing"),
            room_id: RoomId::new("room-1"),
            start,
            end,
        }
    }

    #[test]
    fn test_back_to_back_do_not_conflict() {
        let existing = [booking(at(11, 0), at(12, 0))];
        assert!(!has_conflict(at(10, 0), at(11, 0), &existing));
        assert!(!has_conflict(at(12, 0), at(13, 0), &existing));
    }

    #[test]
    fn test_one_minute_overlap_conflicts() {
        let existing = [booking(at(11, 0), at(12, 0))];
        assert!(has_conflict(at(10, 0), at(11, 1), &existing));
        assert!(has_conflict(at(11, 59), at(13, 0), &existing));
    }

    #[test]
    fn test_containment_conflicts() {
        let existing = [booking(at(9, 0), at(17, 0))];
        // Candidate inside existing, and existing inside candidate.
        assert!(has_conflict(at(10, 0), at(11, 0), &existing));
        let wide = [booking(at(10, 0), at(11, 0))];
        assert!(has_conflict(at(9, 0), at(17, 0), &wide));
    }

    #[test]
    fn test_identical_ranges_conflict() {
        let existing = [booking(at(10, 0), at(11, 0))];
        assert!(has_conflict(at(10, 0), at(11, 0), &existing));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (at(10, 0), at(11, 0), at(10, 30), at(11, 30)),
            (at(10, 0), at(11, 0), at(11, 0), at(12, 0)),
            (at(10, 0), at(12, 0), at(10, 30), at(11, 0)),
            (at(8, 0), at(9, 0), at(13, 0), at(14, 0)),
        ];
        for (s1, e1, s2, e2) in cases {
            assert_eq!(
                ranges_overlap(s1, e1, s2, e2),
                ranges_overlap(s2, e2, s1, e1),
                "overlap must be symmetric for [{}, {}) vs [{}, {})",
                s1,
                e1,
                s2,
                e2
            );
        }
    }

    #[test]
    fn test_no_existing_bookings() {
        assert!(!has_conflict(at(10, 0), at(11, 0), &[]));
    }

    #[test]
    fn test_find_conflict_returns_offender() {
        let existing = [
            booking(at(8, 0), at(9, 0)),
            booking(at(10, 0), at(11, 0)),
        ];
        let hit = find_conflict(at(10, 30), at(10, 45), &existing).unwrap();
        assert_eq!(hit.start, at(10, 0));
        assert!(find_conflict(at(9, 0), at(10, 0), &existing).is_none());
    }
}
