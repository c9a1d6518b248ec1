//! Time utilities: parsing stored punch times, user `HH:MM` input, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Parse a stored punch time.
///
/// `HH:MM:SS` is the canonical format; rows written by older tools may only
/// carry `HH:MM` or `H:MM` (possibly followed by garbage), so at most the
/// first five characters are tried as a fallback. Anything else yields `None`.
pub fn parse_punch_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if let Ok(time) = NaiveTime::parse_from_str(t, "%H:%M:%S") {
        return Some(time);
    }
    let head = t.char_indices().nth(5).map_or(t, |(i, _)| &t[..i]);
    NaiveTime::parse_from_str(head, "%H:%M").ok()
}

/// Strict `HH:MM` parsing for manual input.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if t.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_manual_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| {
        AppError::InvalidTime(format!("'{}' (expected HH:MM, e.g. 09:05)", input))
    })
}
