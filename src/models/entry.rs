//! A single recorded work session.

use chrono::{DateTime, TimeZone};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: i64,
    /// Seconds since the Unix epoch at creation time; doubles as the end time.
    pub timestamp: i64,
    pub minutes: u32,
    pub comment: Option<String>,
    pub paid: bool,
}

impl TimeEntry {
    /// Start of the session, derived as `timestamp - minutes * 60`.
    pub fn start_timestamp(&self) -> i64 {
        self.timestamp - i64::from(self.minutes) * 60
    }

    pub fn start_time<Tz: TimeZone>(&self, tz: &Tz) -> AppResult<DateTime<Tz>> {
        to_datetime(self.start_timestamp(), tz)
    }

    pub fn end_time<Tz: TimeZone>(&self, tz: &Tz) -> AppResult<DateTime<Tz>> {
        to_datetime(self.timestamp, tz)
    }

    /// Worked hours rounded to one decimal, e.g. `1.5`.
    pub fn hours(&self) -> String {
        minutes_to_hours(i64::from(self.minutes))
    }

    pub fn paid_label(&self) -> &'static str {
        if self.paid { "yes" } else { "no" }
    }
}

/// Formats a minute count as hours with one decimal.
pub fn minutes_to_hours(minutes: i64) -> String {
    format!("{:.1}", minutes as f64 / 60.0)
}

fn to_datetime<Tz: TimeZone>(ts: i64, tz: &Tz) -> AppResult<DateTime<Tz>> {
    tz.timestamp_opt(ts, 0)
        .earliest()
        .ok_or(AppError::InvalidTimestamp(ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(timestamp: i64, minutes: u32, paid: bool) -> TimeEntry {
        TimeEntry {
            id: 1,
            timestamp,
            minutes,
            comment: None,
            paid,
        }
    }

    #[test]
    fn start_is_derived_from_minutes() {
        // 2024-03-05 12:00:00 UTC
        let e = entry(1_709_640_000, 90, false);
        let start = e.start_time(&Utc).unwrap();
        assert_eq!(start.format("%H:%M").to_string(), "10:30");
        assert_eq!(e.end_time(&Utc).unwrap().format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn hours_round_to_one_decimal() {
        assert_eq!(entry(0, 90, false).hours(), "1.5");
        assert_eq!(entry(0, 120, false).hours(), "2.0");
        assert_eq!(entry(0, 0, false).hours(), "0.0");
        assert_eq!(entry(0, 50, false).hours(), "0.8");
    }

    #[test]
    fn paid_label() {
        assert_eq!(entry(0, 1, true).paid_label(), "yes");
        assert_eq!(entry(0, 1, false).paid_label(), "no");
    }
}
