//! # Date Formatting
//!
//! Instants are always rendered in UTC using [`DATE_FORMAT`], an ISO 8601
//! calendar date (`YYYY-MM-DD`). The output depends only on the instant,
//! never on the host's locale or local time zone.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone, Utc};
//! use toolkit_core::utils::format_date;
//!
//! let instant = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
//! assert_eq!(format_date(&instant), "2024-03-09");
//!
//! // 2024-03-10 01:30 at UTC+5 is still March 9th in UTC
//! let offset = FixedOffset::east_opt(5 * 3600).unwrap();
//! let local = offset.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
//! assert_eq!(format_date(&local), "2024-03-09");
//! ```

use chrono::{DateTime, TimeZone, Utc};

use crate::errors::{ToolkitError, ToolkitResult};

/// The one format used by [`format_date`] (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render an instant as a UTC calendar date.
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(DATE_FORMAT).to_string()
}

/// Parse an RFC 3339 timestamp (e.g. `2024-03-09T12:00:00+02:00`) into a UTC instant.
pub fn parse_instant(text: &str) -> ToolkitResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            tracing::debug!(input = text, error = %e, "failed to parse timestamp");
            ToolkitError::parse_error(text, "RFC 3339 timestamp")
        })
}
