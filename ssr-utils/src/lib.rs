//! Shared utility functions for SSR crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta};

    /// Shift a reference date by a signed number of days.
    ///
    /// Negative offsets go into the past: `offset_date(today, -1)` is yesterday.
    pub fn offset_date(reference: NaiveDate, days: i64) -> NaiveDate {
        reference
            .checked_add_signed(TimeDelta::days(days))
            .unwrap_or(reference)
    }

    /// Format a date as a short day label, e.g. "Tue 1/14".
    pub fn format_day_label(date: &NaiveDate) -> String {
        format!("{} {}/{}", date.format("%a"), date.month(), date.day())
    }

    /// Format a NaiveDate as "M/D/YYYY"
    pub fn format_date(date: &NaiveDate) -> String {
        format!("{}/{}/{}", date.month(), date.day(), date.year())
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse the calendar date out of a row timestamp.
    ///
    /// Accepts RFC 3339 (`2025-01-14T15:02:11.52+00:00`), a timestamp without
    /// offset, or a bare date.
    pub fn parse_timestamp_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(dt.date());
        }
        parse_date(s)
    }

}
