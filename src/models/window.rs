use serde::{Deserialize, Serialize};
use std::fmt;

use super::{TimeOfDay, Weekday};

/// One open interval of a room's weekly schedule.
///
/// A schedule is an order-insensitive set of windows. Several windows on the
/// same weekday are alternative open intervals for that day. Invariant:
/// start < end, so a single window never wraps past midnight; an overnight
/// opening has to be declared as two windows on consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub weekday: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl AvailabilityWindow {
    /// Create a new window, enforcing start < end.
    pub fn new(weekday: Weekday, start: TimeOfDay, end: TimeOfDay) -> Result<Self, String> {
        if start >= end {
            return Err(format!(
                "Window start {} must be before its end {} (windows cannot cross midnight)",
                start, end
            ));
        }
        Ok(Self {
            weekday,
            start,
            end,
        })
    }

    /// Whether the half-open minute interval [from, to) lies entirely inside
    /// this window's [start, end).
    ///
    /// `to` may be 1440 (midnight at the end of the day), which no window can
    /// contain since window ends are capped at 23:59.
    pub fn contains_minutes(&self, from: u16, to: u16) -> bool {
        from >= self.start.minutes_from_midnight() && to <= self.end.minutes_from_midnight()
    }

    /// The window's time range as it appears in schedule strings, e.g. "09:00-18:00".
    pub fn time_range_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl fmt::Display for AvailabilityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.time_range_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_new_enforces_ordering() {
        assert!(AvailabilityWindow::new(Weekday::Monday, t(9, 0), t(18, 0)).is_ok());
        assert!(AvailabilityWindow::new(Weekday::Monday, t(18, 0), t(9, 0)).is_err());
        assert!(AvailabilityWindow::new(Weekday::Monday, t(9, 0), t(9, 0)).is_err());
    }

    #[test]
    fn test_contains_minutes_boundaries() {
        let w = AvailabilityWindow::new(Weekday::Monday, t(9, 0), t(18, 0)).unwrap();
        // Exact fit is allowed on both ends.
        assert!(w.contains_minutes(540, 1080));
        // Starting one minute early or ending one minute late is not.
        assert!(!w.contains_minutes(539, 1080));
        assert!(!w.contains_minutes(540, 1081));
        // Ending exactly at window close is valid.
        assert!(w.contains_minutes(1079, 1080));
    }

    #[test]
    fn test_contains_never_reaches_midnight() {
        let w = AvailabilityWindow::new(Weekday::Friday, t(0, 0), t(23, 59)).unwrap();
        assert!(!w.contains_minutes(0, 1440));
    }

    #[test]
    fn test_display() {
        let w = AvailabilityWindow::new(Weekday::Saturday, t(10, 0), t(14, 0)).unwrap();
        assert_eq!(w.to_string(), "sâmbătă 10:00-14:00");
        assert_eq!(w.time_range_label(), "10:00-14:00");
    }
}
