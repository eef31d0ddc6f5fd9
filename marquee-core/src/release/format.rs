//! Parsing and display of upstream release date strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Display format for release dates, e.g. `Jun 1, 2023`.
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("release date is empty")]
    Empty,

    #[error("unrecognised release date {0:?}")]
    Malformed(String),
}

/// Parses an ISO-8601 release date.
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp
/// (`2023-06-01T00:00:00.000Z`, normalised to UTC) or a zone-less
/// `YYYY-MM-DDTHH:MM:SS` timestamp. Plain dates resolve to midnight.
pub fn parse_release_date(raw: &str) -> Result<NaiveDateTime, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormatError::Empty);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc());
    }

    if let Ok(timestamp) =
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
    {
        return Ok(timestamp);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| FormatError::Malformed(trimmed.to_string()))
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses and renders a raw release date in one step.
pub fn format_release_date(raw: &str) -> Result<String, FormatError> {
    parse_release_date(raw).map(|timestamp| display_date(timestamp.date()))
}
