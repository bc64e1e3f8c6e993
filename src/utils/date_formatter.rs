use chrono::{DateTime, Utc};

use crate::data_types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

/// Picks the coarsest format that still tells ticks apart over a visible span (ms).
pub fn determine_date_format(visible_range_ms: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0 * 1000.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_ms > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_ms > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_ms > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_ms > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else {
        SmartDateFormat::HourMinSec
    }
}

fn to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms.round() as i64)
}

/// Formats a millisecond timestamp; out-of-range values fall back to the number.
pub fn format_timestamp(ms: f64, format: SmartDateFormat) -> String {
    let Some(dt) = to_datetime(ms) else {
        return format!("{:.2}", ms);
    };

    match format {
        SmartDateFormat::Year => dt.format("%Y").to_string(),
        SmartDateFormat::MonthYear => dt.format("%b %Y").to_string(),
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
    }
}

/// Full date and time, as shown in the cursor tooltip.
pub fn format_datetime(time: Timestamp) -> String {
    match DateTime::<Utc>::from_timestamp_millis(time) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => time.to_string(),
    }
}
