//! Time utilities: parsing HH:MM[:SS] clock values and formatting them.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Accepts "HH:MM" and "HH:MM:SS".
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn format_clock(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// First five characters of a stored clock value ("09:30:00" → "09:30").
pub fn short_clock(raw: &str) -> &str {
    raw.get(..5).unwrap_or(raw)
}

pub fn parse_required_clock(input: &str) -> AppResult<NaiveTime> {
    parse_clock(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn parse_optional_clock(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_required_clock(s).map(Some),
        None => Ok(None),
    }
}
