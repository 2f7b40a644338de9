use serde::{Deserialize, Serialize};
use std::fmt;

/// Civil weekday with the canonical Monday-first numbering.
///
/// Monday is 1 and Sunday is 7 everywhere in this crate. Host calendar
/// primitives that number Sunday as 0 are converted exactly once, in
/// [`crate::civil::weekday_from_chrono`]; no other numbering may leak in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

/// All weekdays in canonical order, Monday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Canonical number, 1 (Monday) through 7 (Sunday).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Build from a canonical number.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// The next weekday; Sunday wraps around to Monday.
    pub fn next(self) -> Self {
        match self {
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
            Weekday::Sunday => Weekday::Monday,
        }
    }

    /// Canonical Romanian display name, with diacritics.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "luni",
            Weekday::Tuesday => "marți",
            Weekday::Wednesday => "miercuri",
            Weekday::Thursday => "joi",
            Weekday::Friday => "vineri",
            Weekday::Saturday => "sâmbătă",
            Weekday::Sunday => "duminică",
        }
    }

    /// Look up a user-supplied day token.
    ///
    /// The token is normalized first, so casing and diacritics do not matter:
    /// "Marți", "marti" and "MARTI" all resolve to Tuesday. The historical
    /// "simbata" spelling of Saturday is accepted as well.
    pub fn from_token(token: &str) -> Option<Self> {
        match normalize_day_token(token).as_str() {
            "luni" => Some(Weekday::Monday),
            "marti" => Some(Weekday::Tuesday),
            "miercuri" => Some(Weekday::Wednesday),
            "joi" => Some(Weekday::Thursday),
            "vineri" => Some(Weekday::Friday),
            "sambata" | "simbata" => Some(Weekday::Saturday),
            "duminica" => Some(Weekday::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a Romanian day token: trim, lowercase, strip diacritics.
///
/// Both the comma-below (ș, ț) and the legacy cedilla (ş, ţ) code points are
/// handled; user input contains either depending on keyboard layout.
pub fn normalize_day_token(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ă' | 'â' => 'a',
            'î' => 'i',
            'ș' | 'ş' => 's',
            'ț' | 'ţ' => 't',
            other => other,
        })
        .collect()
}
