//! Utility functions for API operations

use chrono::{Duration, Local, NaiveDate};

use crate::types::defaults::{DATE_FORMAT, HISTORY_LOOKBACK_DAYS};

/// Format a date the way the history endpoints expect (`YYYYMMDD`)
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current calendar date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve an optional date range against `today`
///
/// A missing start becomes `today - 31 days`, a missing end becomes
/// `today`. Both are returned formatted as `YYYYMMDD`.
pub fn resolve_date_range(
    today: NaiveDate,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
) -> (String, String) {
    let start = date_start.unwrap_or(today - Duration::days(HISTORY_LOOKBACK_DAYS));
    let end = date_end.unwrap_or(today);
    (format_date(start), format_date(end))
}
