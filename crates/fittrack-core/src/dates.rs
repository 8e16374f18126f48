// ABOUTME: Calendar-day keys and day-difference math for streaks and trend windows
// ABOUTME: Keys are timezone-local YYYY-MM-DD strings, differences use calendar dates not milliseconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calendar-day utilities.
//!
//! A [`DayKey`] is the local calendar day a record belongs to. Day differences
//! are computed on calendar dates, so DST transitions never produce a 23- or
//! 25-hour "day".

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Days, NaiveDate, TimeDelta, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format used for stored day keys
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Local calendar day in `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Wrap a calendar date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from year, month, and day; `None` for impossible dates
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Underlying calendar date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Key shifted by a signed number of days; `None` on calendar overflow
    #[must_use]
    pub fn offset_days(self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(Self)
    }

    /// Signed number of days from `self` to `later` (negative when `later` is earlier)
    #[must_use]
    pub fn days_until(self, later: Self) -> i64 {
        (later.0 - self.0).num_days()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|e| AppError::invalid_format(format!("Invalid day key '{s}': {e}")))
    }
}

impl Serialize for DayKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e: AppError| de::Error::custom(e.message))
    }
}

/// Calendar day of a timestamp in the timestamp's own timezone
///
/// `DateTime<Local>` gives the user's local day; the conversion never goes
/// through UTC, so late-evening workouts stay on the day they happened.
#[must_use]
pub fn local_date_key<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> DayKey {
    DayKey(timestamp.date_naive())
}

/// Calendar day of a UTC timestamp shifted by a browser-style timezone offset
///
/// `offset_minutes` follows `Date.getTimezoneOffset()`: minutes to add to local
/// time to reach UTC, positive west of Greenwich (UTC-5 is `300`).
#[must_use]
pub fn local_date_key_with_offset(timestamp: DateTime<Utc>, offset_minutes: i32) -> DayKey {
    let local = timestamp - TimeDelta::minutes(i64::from(offset_minutes));
    DayKey(local.date_naive())
}

/// Absolute number of whole calendar days between two keys
#[must_use]
pub fn day_diff(earlier: DayKey, later: DayKey) -> i64 {
    earlier.days_until(later).abs()
}

/// Absolute number of whole calendar days between two `YYYY-MM-DD` strings
///
/// # Errors
///
/// Returns an `InvalidFormat` error if either string is not a valid day key
pub fn day_diff_str(earlier: &str, later: &str) -> AppResult<i64> {
    Ok(day_diff(earlier.parse()?, later.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_day_key_round_trips_through_string() {
        let day = key("2024-03-09");
        assert_eq!(day.to_string(), "2024-03-09");
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2024-03-09\"");
    }

    #[test]
    fn test_invalid_day_key_is_rejected() {
        assert!("2024-02-30".parse::<DayKey>().is_err());
        assert!("yesterday".parse::<DayKey>().is_err());
        assert!(serde_json::from_str::<DayKey>("\"2024-13-01\"").is_err());
    }

    #[test]
    fn test_day_diff_is_absolute() {
        assert_eq!(day_diff(key("2024-01-01"), key("2024-01-04")), 3);
        assert_eq!(day_diff(key("2024-01-04"), key("2024-01-01")), 3);
        assert_eq!(day_diff(key("2024-01-04"), key("2024-01-04")), 0);
    }

    #[test]
    fn test_day_diff_across_dst_change() {
        // US DST started 2024-03-10; calendar math must still count whole days
        assert_eq!(day_diff(key("2024-03-09"), key("2024-03-11")), 2);
        assert_eq!(day_diff(key("2024-10-26"), key("2024-10-28")), 2);
    }

    #[test]
    fn test_day_diff_across_leap_day() {
        assert_eq!(day_diff_str("2024-02-28", "2024-03-01").unwrap(), 2);
        assert_eq!(day_diff_str("2023-02-28", "2023-03-01").unwrap(), 1);
    }

    #[test]
    fn test_local_date_key_uses_local_calendar_day() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        // 23:30 local on Jan 5 is already Jan 6 in UTC
        let local = tz.with_ymd_and_hms(2024, 1, 5, 23, 30, 0).unwrap();
        assert_eq!(local_date_key(&local), key("2024-01-05"));
        assert_eq!(local_date_key(&local.with_timezone(&Utc)), key("2024-01-06"));
    }

    #[test]
    fn test_local_date_key_with_browser_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 6, 4, 30, 0).unwrap();
        assert_eq!(local_date_key_with_offset(utc, 300), key("2024-01-05"));
        assert_eq!(local_date_key_with_offset(utc, -120), key("2024-01-06"));
    }

    #[test]
    fn test_offset_days() {
        let day = key("2024-12-31");
        assert_eq!(day.offset_days(1), Some(key("2025-01-01")));
        assert_eq!(day.offset_days(-31), Some(key("2024-11-30")));
    }
}
