//! Headline statistics over the full record set. Each calculator is
//! independent and read-only.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, RecordSet};
use crate::utils::date::{last_day_of_month, month_name};
use crate::utils::time::{decimal_hours, mean_time_of_day, round2};
use chrono::{NaiveTime, TimeDelta};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub month: u32,
    pub year: i32,
    pub month_name: &'static str,
    pub last_day: u32,
    /// Configured working days of the month, taken from the first record.
    pub total_working_days: i64,
}

pub fn period_summary(set: &RecordSet) -> AppResult<PeriodSummary> {
    let first = set.first();
    let month_name = month_name(first.month)
        .ok_or_else(|| AppError::malformed(1, "month", format!("invalid month {}", first.month)))?;
    let last_day = last_day_of_month(first.year, first.month)
        .ok_or_else(|| AppError::malformed(1, "Year", format!("invalid year {}", first.year)))?;

    Ok(PeriodSummary {
        month: first.month,
        year: first.year,
        month_name,
        last_day,
        total_working_days: first.total_working_days_in_month,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    /// Σ workingDays
    pub scheduled_days: i64,
    /// Σ workingDays - Σ offHours - Σ notFoundDays
    pub attendance: f64,
    pub attendance_pct: f64,
}

pub fn overall_attendance(records: &[AttendanceRecord]) -> AppResult<AttendanceSummary> {
    if records.is_empty() {
        return Err(AppError::EmptyRecordSet);
    }

    let scheduled_days: i64 = records.iter().map(|r| r.working_days).sum();
    let off_hours: f64 = records.iter().map(|r| r.off_hours).sum();
    let not_found: i64 = records.iter().map(|r| r.not_found_days).sum();

    if scheduled_days == 0 {
        return Err(AppError::DivisionByZero(
            "attendance percentage (total working days is 0)".into(),
        ));
    }

    let attendance = scheduled_days as f64 - off_hours - not_found as f64;
    let attendance_pct = round2(100.0 * attendance / scheduled_days as f64);

    debug!(scheduled_days, attendance, attendance_pct, "overall attendance");

    Ok(AttendanceSummary {
        scheduled_days,
        attendance,
        attendance_pct,
    })
}

/// On-site vs remote share. Both percentages are relative to attendance,
/// not to each other, so they need not add up to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkModeSplit {
    pub on_site_pct: f64,
    pub remote_pct: f64,
    /// Average on-site headcount per working day.
    pub on_site_per_day: i64,
    /// Average remote headcount per working day.
    pub remote_per_day: i64,
}

pub fn work_mode_split(
    records: &[AttendanceRecord],
    attendance: &AttendanceSummary,
    total_working_days: i64,
) -> AppResult<WorkModeSplit> {
    if attendance.attendance == 0.0 {
        return Err(AppError::DivisionByZero(
            "on-site/remote percentages (attendance is 0)".into(),
        ));
    }
    if total_working_days == 0 {
        return Err(AppError::DivisionByZero(
            "employees per day (total working days of the month is 0)".into(),
        ));
    }

    let on_site: i64 = records.iter().map(|r| r.on_site_days).sum();
    let remote: i64 = records.iter().map(|r| r.remote_days).sum();

    let pct = |days: i64| round2(100.0 * days as f64 / attendance.attendance);
    let per_day = |days: i64| (days as f64 / total_working_days as f64).round_ties_even() as i64;

    Ok(WorkModeSplit {
        on_site_pct: pct(on_site),
        remote_pct: pct(remote),
        on_site_per_day: per_day(on_site),
        remote_per_day: per_day(remote),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTimes {
    pub check_in: NaiveTime,
    pub check_out: NaiveTime,
}

/// Mean of the per-employee average check-in and check-out times.
pub fn average_check_times(records: &[AttendanceRecord]) -> AppResult<CheckTimes> {
    let check_in = mean_time_of_day(records.iter().map(|r| r.avg_check_in));
    let check_out = mean_time_of_day(records.iter().map(|r| r.avg_check_out));

    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => Ok(CheckTimes {
            check_in,
            check_out,
        }),
        _ => Err(AppError::EmptyRecordSet),
    }
}

fn sum_durations<F>(records: &[AttendanceRecord], field: F) -> TimeDelta
where
    F: Fn(&AttendanceRecord) -> TimeDelta,
{
    records
        .iter()
        .fold(TimeDelta::zero(), |acc, r| acc + field(r))
}

/// Σ total working hours, in decimal hours.
pub fn total_working_hours(records: &[AttendanceRecord]) -> f64 {
    round2(decimal_hours(sum_durations(records, |r| r.total_working_hours)))
}

/// Σ total overtime, in decimal hours.
pub fn total_overtime_hours(records: &[AttendanceRecord]) -> f64 {
    round2(decimal_hours(sum_durations(records, |r| r.total_overtime)))
}

pub fn total_permissions(records: &[AttendanceRecord]) -> i64 {
    records.iter().map(|r| r.permission_days).sum()
}

/// Σ "total out time", summed in its stored unit with no hour conversion.
pub fn total_delay_measure(records: &[AttendanceRecord]) -> f64 {
    records.iter().map(|r| r.late_arrival).sum()
}

/// All headline statistics of one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMetrics {
    pub period: PeriodSummary,
    pub attendance: AttendanceSummary,
    pub work_mode: WorkModeSplit,
    pub check_times: CheckTimes,
    pub total_working_hours: f64,
    pub total_overtime_hours: f64,
    pub total_permissions: i64,
    pub total_delay: f64,
}

pub fn compute(set: &RecordSet) -> AppResult<MonthlyMetrics> {
    let records = set.records();
    let period = period_summary(set)?;
    let attendance = overall_attendance(records)?;
    let work_mode = work_mode_split(records, &attendance, period.total_working_days)?;

    Ok(MonthlyMetrics {
        check_times: average_check_times(records)?,
        total_working_hours: total_working_hours(records),
        total_overtime_hours: total_overtime_hours(records),
        total_permissions: total_permissions(records),
        total_delay: total_delay_measure(records),
        period,
        attendance,
        work_mode,
    })
}
