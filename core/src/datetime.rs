// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Datetime helpers for minute-precision editing fields.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

// YYYY-MM-DDTHH:MM
const MINUTE_WIDTH: usize = 16;

/// Cuts a datetime string to minute precision (`YYYY-MM-DDTHH:MM`).
///
/// Stored values may carry seconds, subseconds, or a zone suffix; editing
/// always works at minute precision. Strings whose head does not parse as
/// a datetime are passed through unchanged.
#[must_use]
pub fn truncate_to_minute(value: &str) -> String {
    if value.len() <= MINUTE_WIDTH || !value.is_char_boundary(MINUTE_WIDTH) {
        return value.to_string();
    }
    let head = &value[..MINUTE_WIDTH];
    if head.parse::<DateTime>().is_ok() {
        head.to_string()
    } else {
        value.to_string()
    }
}

/// Whole days from `now` until an ISO datetime, rounded up, floored at
/// zero. `None` when the value does not parse.
#[must_use]
pub fn days_until(value: &str, now: &Zoned) -> Option<i64> {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    let end = parse_lenient(value, now.time_zone())?;
    let millis = end.timestamp().as_millisecond() - now.timestamp().as_millisecond();
    if millis <= 0 {
        Some(0)
    } else {
        Some((millis + DAY_MS - 1) / DAY_MS)
    }
}

/// Parses timestamps with or without zone, bare datetimes, and bare dates.
fn parse_lenient(value: &str, tz: &TimeZone) -> Option<Zoned> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(tz.clone()));
    }
    if let Ok(datetime) = value.parse::<DateTime>() {
        return datetime.to_zoned(tz.clone()).ok();
    }
    if let Ok(date) = value.parse::<Date>() {
        return date.to_datetime(Time::midnight()).to_zoned(tz.clone()).ok();
    }
    None
}
