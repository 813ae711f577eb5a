//! Time utilities: time-of-day and duration parsing, duration-to-hours
//! conversion, `HH:MM:SS` formatting and linear time-of-day averaging.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta, Timelike};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a clock time written as `HH:MM:SS` or `HH:MM`.
pub fn parse_time_of_day(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Parse an accumulated duration.
///
/// Accepted shapes:
/// - `HH:MM:SS`, `HH:MM`, optional fractional seconds (`08:00:00.5`)
/// - hour fields past 24 (`176:30:00`)
/// - a day prefix as spreadsheets print it (`1 day 02:00:00`, `3 days, 04:00:00`)
pub fn parse_duration(s: &str) -> AppResult<TimeDelta> {
    let raw = s.trim();
    let invalid = || AppError::InvalidDuration(raw.to_string());

    if raw.is_empty() || raw.starts_with('-') {
        return Err(invalid());
    }

    let (days, clock) = match raw.find("day") {
        Some(idx) => {
            let days: i64 = raw[..idx].trim().parse().map_err(|_| invalid())?;
            let rest = raw[idx + 3..].trim_start_matches('s');
            let rest = rest.trim().trim_start_matches(',').trim();
            (days, rest)
        }
        None => (0, raw),
    };

    let clock_micros = if clock.is_empty() {
        0
    } else {
        parse_clock_micros(clock).ok_or_else(invalid)?
    };

    let total = days
        .checked_mul(SECONDS_PER_DAY * 1_000_000)
        .and_then(|d| d.checked_add(clock_micros))
        .ok_or_else(invalid)?;

    Ok(TimeDelta::microseconds(total))
}

/// `H+:MM[:SS[.ffffff]]` → microseconds. Minutes and seconds must be below 60.
fn parse_clock_micros(clock: &str) -> Option<i64> {
    let parts: Vec<&str> = clock.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let hours: i64 = parse_digits(parts[0])?;
    let minutes: i64 = parse_digits(parts[1])?;
    if minutes >= 60 {
        return None;
    }

    let (seconds, micros) = match parts.get(2) {
        None => (0, 0),
        Some(sec) => {
            let (whole, frac) = match sec.split_once('.') {
                Some((w, f)) => (w, f),
                None => (*sec, ""),
            };
            let seconds: i64 = parse_digits(whole)?;
            if seconds >= 60 || !frac.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            // keep microsecond precision, drop anything finer
            let mut digits: String = frac.chars().take(6).collect();
            while digits.len() < 6 {
                digits.push('0');
            }
            (seconds, digits.parse::<i64>().ok()?)
        }
    };

    let secs = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60)?
        .checked_add(seconds)?;
    secs.checked_mul(1_000_000)?.checked_add(micros)
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Convert a duration to decimal hours: `days × 24 + seconds / 3600`,
/// where `seconds` is the whole-second remainder within the last day.
pub fn decimal_hours(d: TimeDelta) -> f64 {
    let secs = d.num_seconds();
    let days = secs.div_euclid(SECONDS_PER_DAY);
    let rem = secs.rem_euclid(SECONDS_PER_DAY);
    (days * 24) as f64 + rem as f64 / 3600.0
}

/// Round half away from zero to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Format a count of seconds as `HH:MM:SS`; hours are not wrapped at 24.
pub fn format_hms(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let s = total_seconds.abs();
    let (hours, rem) = (s / 3600, s % 3600);
    let (minutes, seconds) = (rem / 60, rem % 60);
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a clock time as `HH:MM:SS`.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Linear mean of clock times, taken as durations since midnight and
/// truncated to whole seconds. Returns `None` for an empty input.
///
/// Shifts crossing midnight would need a circular mean; the data this
/// tool reads never contains them.
pub fn mean_time_of_day<I>(times: I) -> Option<NaiveTime>
where
    I: IntoIterator<Item = NaiveTime>,
{
    let mut count: u64 = 0;
    let mut total: u64 = 0;

    for t in times {
        total += t.num_seconds_from_midnight() as u64;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    // integer division truncates, same as dropping sub-second precision
    NaiveTime::from_num_seconds_from_midnight_opt((total / count) as u32, 0)
}
