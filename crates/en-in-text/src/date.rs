//! Long-form dates in day-month-year order

use crate::{FormatError, Result};
use chrono::NaiveDate;

/// Format a date as "DD Month YYYY" (e.g., "05 March 2024")
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Format a date given as year, month (1-12) and day
///
/// Returns `None` when the components do not form a calendar date.
pub fn format_long_date_ymd(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(format_long_date)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| FormatError::InvalidDate(format!("{text}: {e}")))
}
