//! Canonical rendering of a structured schedule back to its string form.
//!
//! The output is re-parseable by [`super::parser`]: clauses joined with
//! ", " (comma after a time range starts a new clause), day lists inside a
//! clause joined with "," (comma after a day name stays in the clause).
//! Parsing the formatted string yields the same structured schedule, so the
//! UI can show a normalized preview of whatever the owner typed.

use std::collections::BTreeMap;

use crate::models::{AvailabilityWindow, Weekday, ALL_WEEKDAYS};

/// Render a schedule as a canonical availability string.
///
/// Windows are grouped by identical time range, days within a group are
/// sorted Monday-first and consecutive runs of two or more days collapse to
/// an `a-b` range. An empty schedule renders as the empty string.
pub fn format_schedule(windows: &[AvailabilityWindow]) -> String {
    if windows.is_empty() {
        return String::new();
    }

    // Group days by time range; BTreeMap keeps clause order stable.
    let mut groups: BTreeMap<(u16, u16), (String, Vec<Weekday>)> = BTreeMap::new();
    for w in windows {
        let key = (
            w.start.minutes_from_midnight(),
            w.end.minutes_from_midnight(),
        );
        let entry = groups
            .entry(key)
            .or_insert_with(|| (w.time_range_label(), Vec::new()));
        if !entry.1.contains(&w.weekday) {
            entry.1.push(w.weekday);
        }
    }

    let mut clauses = Vec::with_capacity(groups.len());
    for (_, (time_label, mut days)) in groups {
        days.sort();
        clauses.push(format!("{} {}", format_day_spec(&days), time_label));
    }
    clauses.join(", ")
}

/// Collapse a sorted day set into the shortest day specification.
fn format_day_spec(days: &[Weekday]) -> String {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < days.len() {
        let mut end = i;
        while end + 1 < days.len()
            && days[end + 1].number() == days[end].number() + 1
        {
            end += 1;
        }
        if end > i {
            parts.push(format!("{}-{}", days[i], days[end]));
        } else {
            parts.push(days[i].to_string());
        }
        i = end + 1;
    }
    parts.join(",")
}

/// Human-oriented summary used in rejection messages and previews:
/// one entry per weekday that has windows, in canonical day order.
pub fn day_windows_label(windows: &[AvailabilityWindow], day: Weekday) -> String {
    let mut labels: Vec<String> = windows
        .iter()
        .filter(|w| w.weekday == day)
        .map(|w| w.time_range_label())
        .collect();
    labels.sort();
    labels.join(", ")
}

/// Whether the schedule declares any window at all for the given day.
pub fn day_has_windows(windows: &[AvailabilityWindow], day: Weekday) -> bool {
    windows.iter().any(|w| w.weekday == day)
}

/// Days with at least one window, in canonical order.
pub fn open_days(windows: &[AvailabilityWindow]) -> Vec<Weekday> {
    ALL_WEEKDAYS
        .into_iter()
        .filter(|d| day_has_windows(windows, *d))
        .collect()
}
