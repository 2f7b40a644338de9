//! Schedule-side validation of a candidate booking.
//!
//! Decides whether a booking's instant-range lies entirely within the open
//! hours a room declared, reading both endpoints in the room's locale
//! timezone. Conflict checking against existing bookings is a separate
//! concern, see [`super::overlap`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

use crate::civil;
use crate::models::{AvailabilityWindow, Weekday};
use crate::schedule::formatter::day_has_windows;

const MINUTES_PER_DAY: u16 = 1440;

/// A half-open portion of one civil day, in minutes from midnight.
///
/// `end` may be 1440 when the booked portion runs to the end of the day;
/// [`crate::models::TimeOfDay`] cannot express that boundary, a raw minute
/// count can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub start: u16,
    pub end: u16,
}

impl DaySpan {
    fn minute_label(minute: u16) -> String {
        if minute == MINUTES_PER_DAY {
            "24:00".to_string()
        } else {
            format!("{:02}:{:02}", minute / 60, minute % 60)
        }
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            Self::minute_label(self.start),
            Self::minute_label(self.end)
        )
    }
}

/// Outcome of schedule validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected(RejectionReason),
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            Decision::Accepted => None,
            Decision::Rejected(reason) => Some(reason),
        }
    }
}

/// Why a booking was rejected by schedule validation.
///
/// These are ordinary rejections returned as values, never panics; `code()`
/// gives the stable machine-readable identifier and `Display` the message
/// shown to the user, naming the offending day and its open windows so the
/// user can self-correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// End does not come after start.
    InvalidRange,
    /// Start lies before the supplied `now` reference.
    StartInPast,
    /// The booking touches a civil day with no declared window at all.
    NoScheduleForDay { day: Weekday },
    /// The day is open, but no single window contains the booked portion.
    OutsideWindow {
        day: Weekday,
        requested: DaySpan,
        available: Vec<AvailabilityWindow>,
    },
}

impl RejectionReason {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidRange => "invalid_range",
            RejectionReason::StartInPast => "start_in_past",
            RejectionReason::NoScheduleForDay { .. } => "no_schedule_for_day",
            RejectionReason::OutsideWindow { .. } => "outside_window",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::InvalidRange => {
                write!(f, "booking end must come after its start")
            }
            RejectionReason::StartInPast => {
                write!(f, "booking start is in the past")
            }
            RejectionReason::NoScheduleForDay { day } => {
                write!(f, "the room is not open on {}", day)
            }
            RejectionReason::OutsideWindow {
                day,
                requested,
                available,
            } => {
                let labels: Vec<String> =
                    available.iter().map(|w| w.time_range_label()).collect();
                write!(
                    f,
                    "the requested time {} on {} does not fit the open windows: {}",
                    requested,
                    day,
                    labels.join(", ")
                )
            }
        }
    }
}

/// Validate a candidate booking against a parsed schedule.
///
/// Both endpoints are resolved in `tz`, the room's locale timezone, so the
/// declared "marți 09:00-18:00" means Tuesday in the room's locale no matter
/// where the requester is. An empty schedule accepts everything (no
/// restriction declared). When `now` is supplied, starts strictly before it
/// are rejected with the distinct [`RejectionReason::StartInPast`]; passing
/// `None` leaves that policy entirely to the caller.
pub fn validate(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    tz: Tz,
    schedule: &[AvailabilityWindow],
    now: Option<DateTime<Utc>>,
) -> Decision {
    if end <= start {
        return Decision::Rejected(RejectionReason::InvalidRange);
    }
    if let Some(now) = now {
        if start < now {
            return Decision::Rejected(RejectionReason::StartInPast);
        }
    }
    if schedule.is_empty() {
        return Decision::Accepted;
    }

    let civil_start = civil::resolve(start, tz);
    let civil_end = civil::resolve(end, tz);

    if civil_start.date == civil_end.date {
        let span = DaySpan {
            start: civil_start.time.minutes_from_midnight(),
            end: civil_end.time.minutes_from_midnight(),
        };
        return match day_failure(civil_start.weekday, span, schedule) {
            None => Decision::Accepted,
            Some(reason) => Decision::Rejected(reason),
        };
    }

    // Multi-day span. The booked portion is [startTime, midnight) on the
    // first day, the whole day in between, [midnight, endTime) on the last;
    // a last portion that is empty (end at exactly 00:00) is skipped.
    let mut dates = Vec::new();
    let mut date = civil_start.date;
    while date < civil_end.date {
        dates.push(date);
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    if civil_end.time.minutes_from_midnight() != 0 {
        dates.push(civil_end.date);
    }

    // Day existence is checked for the whole span before any containment,
    // so a closed day is reported as such even when an earlier portion
    // would already fail on hours.
    for date in &dates {
        let day = civil::weekday_of_date(*date);
        if !day_has_windows(schedule, day) {
            return Decision::Rejected(RejectionReason::NoScheduleForDay { day });
        }
    }

    for date in &dates {
        let day = civil::weekday_of_date(*date);
        let span = DaySpan {
            start: if *date == civil_start.date {
                civil_start.time.minutes_from_midnight()
            } else {
                0
            },
            end: if *date == civil_end.date {
                civil_end.time.minutes_from_midnight()
            } else {
                MINUTES_PER_DAY
            },
        };
        if let Some(reason) = day_failure(day, span, schedule) {
            return Decision::Rejected(reason);
        }
    }

    Decision::Accepted
}

/// Check one civil day's booked portion against that day's windows.
fn day_failure(
    day: Weekday,
    span: DaySpan,
    schedule: &[AvailabilityWindow],
) -> Option<RejectionReason> {
    let mut windows: Vec<AvailabilityWindow> = schedule
        .iter()
        .filter(|w| w.weekday == day)
        .copied()
        .collect();
    if windows.is_empty() {
        return Some(RejectionReason::NoScheduleForDay { day });
    }
    if windows
        .iter()
        .any(|w| w.contains_minutes(span.start, span.end))
    {
        return None;
    }
    windows.sort_by_key(|w| w.start.minutes_from_midnight());
    Some(RejectionReason::OutsideWindow {
        day,
        requested: span,
        available: windows,
    })
}
