// Author: Dustin Pilgrim
// License: MIT

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::SconfError;

/// Canonical date text layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

static DATE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid date-time pattern"));
static DATE_ONLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));

pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Parse canonical date text. Text longer than ten characters must carry a
/// time of day; shorter text is a bare date at midnight.
pub fn parse_date(text: &str) -> Result<NaiveDateTime, SconfError> {
    let parsed = if text.len() > 10 {
        if !DATE_TIME_RE.is_match(text) {
            return Err(invalid(text));
        }
        NaiveDateTime::parse_from_str(text, DATE_FORMAT).ok()
    } else {
        if !DATE_ONLY_RE.is_match(text) {
            return Err(invalid(text));
        }
        NaiveDate::parse_from_str(text, DATE_ONLY_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    };

    parsed.ok_or_else(|| invalid(text))
}

pub(super) fn truncate(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

fn invalid(text: &str) -> SconfError {
    SconfError::InvalidFormat {
        message: format!("Invalid date '{}'", text),
        hint: Some("Expected yyyy-MM-dd [hh:mm:ss]".into()),
        code: Some(501),
    }
}
