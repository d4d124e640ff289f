//! Human readable formatting for the values shown in embeds.
//!
//! All functions here are pure and total over their numeric domain.

use chrono::{DateTime, Utc};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;

/// Converts a byte count to mebibytes with exactly three decimals.
///
/// # Arguments
/// - `bytes` - Byte count, expected to be non-negative
///
/// # Returns
/// - `String` - e.g. `"512.000 MiB"` for 536870912 bytes
pub fn to_mebibytes(bytes: f64) -> String {
    let kibibytes = bytes / 1_024.0;
    let mebibytes = kibibytes / 1_024.0;
    format!("{:.3} MiB", mebibytes)
}

/// Formats a millisecond duration as `1w 2d 3h 4m 5s 6ms`.
///
/// Only non-zero components are emitted, largest unit first. A zero duration yields an
/// empty string, callers that display the result must substitute a placeholder.
pub fn format_duration(milliseconds: u64) -> String {
    let weeks = milliseconds / MILLIS_PER_WEEK;
    let mut remaining = milliseconds % MILLIS_PER_WEEK;
    let days = remaining / MILLIS_PER_DAY;
    remaining %= MILLIS_PER_DAY;
    let hours = remaining / MILLIS_PER_HOUR;
    remaining %= MILLIS_PER_HOUR;
    let minutes = remaining / MILLIS_PER_MINUTE;
    remaining %= MILLIS_PER_MINUTE;
    let seconds = remaining / MILLIS_PER_SECOND;
    let millis = remaining % MILLIS_PER_SECOND;

    [
        (weeks, "w"),
        (days, "d"),
        (hours, "h"),
        (minutes, "m"),
        (seconds, "s"),
        (millis, "ms"),
    ]
    .iter()
    .filter(|(value, _)| *value > 0)
    .map(|(value, unit)| format!("{}{}", value, unit))
    .collect::<Vec<_>>()
    .join(" ")
}

/// Formats a sensor reading with two decimals followed by `unit`.
pub fn format_decimal(value: f64, unit: &str) -> String {
    format!("{:.2}{}", value, unit)
}

/// Formats an integer with comma thousands separators, e.g. `1,234`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Formats a timestamp as `June 01, 2021 12:00:00.000PM UTC`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    format!("{} UTC", timestamp.format("%B %d, %Y %I:%M:%S%.3f%p"))
}
