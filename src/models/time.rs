use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wall-clock time of day, no date component.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeOfDay {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
}

impl TimeOfDay {
    /// Create a new time of day.
    pub fn new(hour: u8, minute: u8) -> Result<Self, String> {
        if hour > 23 {
            return Err(format!("Hour must be between 0 and 23, got {}", hour));
        }
        if minute > 59 {
            return Err(format!("Minute must be between 0 and 59, got {}", minute));
        }
        Ok(Self { hour, minute })
    }

    /// Minutes elapsed since midnight, 0..=1439.
    ///
    /// All interval containment arithmetic is done on this value so that
    /// comparisons stay plain integer comparisons.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Parse `H:MM` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid time token '{}'", s))?;
        if m.len() != 2 || h.is_empty() || h.len() > 2 {
            return Err(format!("Invalid time token '{}'", s));
        }
        let hour: u8 = h
            .parse()
            .map_err(|_| format!("Invalid hour in time token '{}'", s))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| format!("Invalid minute in time token '{}'", s))?;
        TimeOfDay::new(hour, minute)
    }
}
