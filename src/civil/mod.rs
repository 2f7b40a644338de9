//! Civil calendar resolution.
//!
//! Maps an absolute instant to the calendar day, weekday and wall-clock time
//! as perceived in a given IANA timezone, using the real tz database via
//! `chrono-tz` (DST-aware, never a fixed UTC offset). This is the only place
//! where chrono's own weekday numbering is touched; everything downstream
//! sees the canonical Monday=1..Sunday=7 [`Weekday`].

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::models::{TimeOfDay, Weekday};

/// An instant expressed in a timezone's civil calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilInstant {
    /// Civil calendar date in the zone.
    pub date: NaiveDate,
    /// Civil weekday, canonical numbering.
    pub weekday: Weekday,
    /// Wall-clock time of day in the zone.
    pub time: TimeOfDay,
}

/// Resolve an absolute instant to its civil calendar reading in `tz`.
pub fn resolve(instant: DateTime<Utc>, tz: Tz) -> CivilInstant {
    let local = instant.with_timezone(&tz);
    CivilInstant {
        date: local.date_naive(),
        weekday: weekday_from_chrono(local.weekday()),
        time: TimeOfDay {
            hour: local.hour() as u8,
            minute: local.minute() as u8,
        },
    }
}

/// Civil weekday of a plain calendar date.
pub fn weekday_of_date(date: NaiveDate) -> Weekday {
    weekday_from_chrono(date.weekday())
}

/// Convert chrono's weekday to the canonical Monday=1..Sunday=7 numbering.
///
/// Kept as a single isolated function: host calendar primitives disagree on
/// weekday numbering (chrono counts from Monday, JavaScript's `Date` from
/// Sunday), and letting a foreign number slip through is a classic
/// off-by-one. No 0-indexed value may leak past this boundary.
pub fn weekday_from_chrono(wd: chrono::Weekday) -> Weekday {
    match wd {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}
