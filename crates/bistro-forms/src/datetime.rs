//! Parsing of submitted date/time values.
//!
//! Values without an offset are taken as UTC. A bare date means midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::FormData;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%:z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses a submitted date/time string.
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Reads the raw value of a date/time field.
///
/// Falls back to the select-widget triplet `<name>_year`, `<name>_month`,
/// `<name>_day` when the field itself was not submitted. An all-blank
/// triplet reads as blank.
pub fn raw_datetime(data: &FormData, name: &str) -> Option<String> {
    if let Some(value) = data.get(name) {
        return Some(value.to_string());
    }
    let part = |suffix: &str| data.get(&format!("{name}_{suffix}")).map(str::trim);
    match (part("year"), part("month"), part("day")) {
        (None, None, None) => None,
        (year, month, day) => {
            let (year, month, day) = (
                year.unwrap_or_default(),
                month.unwrap_or_default(),
                day.unwrap_or_default(),
            );
            if year.is_empty() && month.is_empty() && day.is_empty() {
                Some(String::new())
            } else {
                Some(format!("{year}-{month}-{day}"))
            }
        }
    }
}
