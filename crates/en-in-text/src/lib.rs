//! en-IN Text - Indian English formatting
//!
//! This crate provides:
//! - Indian digit grouping (1,00,000 / 12,34,56,789)
//! - Rupee currency rendering with whole-rupee rounding
//! - Lenient numeric parsing that never fails
//! - Long dates in day-month-year order ("15 January 2024")
//!
//! # Example
//!
//! ```
//! use en_in_text::{format_currency, format_long_date};
//! use chrono::NaiveDate;
//!
//! assert_eq!(format_currency("100000"), "₹1,00,000");
//! assert_eq!(format_currency(""), "");
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(format_long_date(date), "15 January 2024");
//! ```

mod currency;
mod date;

pub use currency::{format_currency, format_inr, group_indian, parse_js_float, RUPEE_SIGN};
pub use date::{format_long_date, format_long_date_ymd, parse_iso_date};

use thiserror::Error;

/// Errors that can occur during text formatting
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
