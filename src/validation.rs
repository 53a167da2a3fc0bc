//! Validation helper functions
//!
//! Text validation used by the store, and due-date parsing used by the
//! command-line front end.

use anyhow::{Result, bail};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::StoreError;

/// Time of day used when a due date is given without one
pub const DEFAULT_DUE_TIME: (u32, u32) = (9, 0);

/// Reject item text or list names that are empty after trimming
///
/// # Arguments
/// * `text` - Text to validate
///
/// # Returns
/// `Ok(())` if the text has visible content, `StoreError::EmptyText` otherwise
pub fn require_text(text: &str) -> Result<(), StoreError> {
    if text.trim().is_empty() {
        Err(StoreError::EmptyText)
    } else {
        Ok(())
    }
}

/// Parse a due date given on the command line
///
/// Accepted forms:
/// - RFC 3339 (e.g., "2025-03-15T18:30:00Z")
/// - local date and time, "YYYY-MM-DD HH:MM" (e.g., "2025-03-15 18:30")
/// - local date, "YYYY-MM-DD" (due at 09:00 local time)
///
/// # Returns
/// The due date in UTC or an error describing the accepted formats
pub fn parse_due_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = if let Ok(date_time) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        date_time
    } else if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let (hour, minute) = DEFAULT_DUE_TIME;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        date.and_time(time)
    } else {
        bail!(
            "Invalid due date '{}'. Use YYYY-MM-DD, 'YYYY-MM-DD HH:MM' or RFC 3339 (e.g., '2025-03-15 18:30')",
            input
        );
    };

    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => Ok(local.with_timezone(&Utc)),
        None => bail!("Due date '{}' does not exist in the local time zone", input),
    }
}
