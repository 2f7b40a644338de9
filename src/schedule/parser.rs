//! Parser for free-form weekly availability strings.
//!
//! The input is a comma-separated list of clauses, each clause a day
//! specification followed by a time range:
//!
//! ```text
//! Luni-Vineri 09:00-18:00, Sâmbătă 10:00-14:00
//! Luni,Miercuri,Vineri 08:00-20:00
//! ```
//!
//! Day names are Romanian, accepted in any case with or without diacritics.
//! The same comma character separates clauses *and* the days inside a
//! same-clause day list, so the splitter only treats a comma as a clause
//! boundary when the text before it ends with a time range. A naive split on
//! every comma would tear "luni,miercuri 08:00-20:00" apart.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{AvailabilityWindow, TimeOfDay, Weekday};

/// Errors raised for a single schedule clause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown day token '{token}' in clause '{clause}'")]
    UnknownDayToken { token: String, clause: String },

    /// Covers a missing or syntactically invalid `HH:MM-HH:MM` token, an
    /// out-of-range hour or minute, and a range whose end does not come
    /// after its start (overnight clauses are not expressible).
    #[error("malformed time range in clause '{clause}'")]
    MalformedTimeRange { clause: String },

    #[error("no day specification in clause '{clause}'")]
    EmptyDaySpec { clause: String },

    #[error("unexpected trailing input '{rest}' in clause '{clause}'")]
    TrailingGarbage { clause: String, rest: String },
}

/// A clause the lenient parser refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedClause {
    pub clause: String,
    pub error: ParseError,
}

/// Result of a lenient parse: the windows that parsed plus every clause
/// that was skipped, so callers can surface warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub windows: Vec<AvailabilityWindow>,
    pub skipped: Vec<SkippedClause>,
}

fn time_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})").expect("valid time range regex")
    })
}

fn clause_tail_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,2}:\d{2}\s*$").expect("valid clause tail regex"))
}

/// Parse an availability string leniently.
///
/// Clauses that fail to parse are skipped and recorded in
/// [`ParseOutcome::skipped`]; the windows of every well-formed clause are
/// returned regardless. An empty or blank input yields no windows, which
/// downstream validation treats as "no restriction declared".
///
/// Output ordering is not guaranteed.
pub fn parse(raw: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for clause in split_clauses(raw) {
        match parse_clause(clause) {
            Ok(mut windows) => outcome.windows.append(&mut windows),
            Err(error) => outcome.skipped.push(SkippedClause {
                clause: clause.to_string(),
                error,
            }),
        }
    }
    outcome
}

/// Parse an availability string strictly: the first bad clause fails the
/// whole parse.
pub fn parse_strict(raw: &str) -> Result<Vec<AvailabilityWindow>, ParseError> {
    let mut windows = Vec::new();
    for clause in split_clauses(raw) {
        windows.append(&mut parse_clause(clause)?);
    }
    Ok(windows)
}

/// Split the raw string into clauses.
///
/// A comma is a clause separator only when the text before it ends with a
/// time token; every other comma belongs to a day list inside its clause.
fn split_clauses(raw: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut seg_start = 0usize;
    for (idx, ch) in raw.char_indices() {
        if ch == ',' && clause_tail_re().is_match(&raw[seg_start..idx]) {
            clauses.push(&raw[seg_start..idx]);
            seg_start = idx + 1;
        }
    }
    clauses.push(&raw[seg_start..]);
    clauses
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Parse one `<dayspec> <HH:MM>-<HH:MM>` clause into its expanded windows.
fn parse_clause(clause: &str) -> Result<Vec<AvailabilityWindow>, ParseError> {
    let caps = time_range_re()
        .captures(clause)
        .ok_or_else(|| ParseError::MalformedTimeRange {
            clause: clause.to_string(),
        })?;
    let full = caps.get(0).expect("regex match has a full capture");

    let rest = clause[full.end()..].trim();
    if !rest.is_empty() {
        return Err(ParseError::TrailingGarbage {
            clause: clause.to_string(),
            rest: rest.to_string(),
        });
    }

    let malformed = || ParseError::MalformedTimeRange {
        clause: clause.to_string(),
    };
    let start: TimeOfDay = caps[1].parse().map_err(|_| malformed())?;
    let end: TimeOfDay = caps[2].parse().map_err(|_| malformed())?;
    if start >= end {
        return Err(malformed());
    }

    let day_spec = clause[..full.start()].trim();
    if day_spec.is_empty() {
        return Err(ParseError::EmptyDaySpec {
            clause: clause.to_string(),
        });
    }

    let days = parse_day_spec(day_spec, clause)?;
    Ok(days
        .into_iter()
        .map(|weekday| AvailabilityWindow {
            weekday,
            start,
            end,
        })
        .collect())
}

/// Expand a day specification into concrete weekdays.
///
/// The spec is a comma-separated list of items; each item is a single day
/// name or an inclusive range `a-b`, wrapping across the end of the week
/// when b precedes a. The list is split before ranges are, so the
/// formatter's mixed output ("luni,sâmbătă-duminică") parses back exactly.
fn parse_day_spec(spec: &str, clause: &str) -> Result<Vec<Weekday>, ParseError> {
    let lookup = |token: &str| {
        Weekday::from_token(token).ok_or_else(|| ParseError::UnknownDayToken {
            token: token.trim().to_string(),
            clause: clause.to_string(),
        })
    };

    let mut days = Vec::new();
    for item in spec.split(',') {
        if item.trim().is_empty() {
            return Err(ParseError::EmptyDaySpec {
                clause: clause.to_string(),
            });
        }
        if let Some((from, to)) = item.split_once('-') {
            let start = lookup(from)?;
            let end = lookup(to)?;
            let mut day = start;
            days.push(day);
            while day != end {
                day = day.next();
                days.push(day);
            }
        } else {
            days.push(lookup(item)?);
        }
    }
    Ok(days)
}
