//! Top-N rankings.
//!
//! Each ranking first projects records onto an explicit allow-list of
//! columns, then sorts descending by the ranking metric. The sort is stable,
//! so employees with equal values keep their sheet order.

use crate::models::{AttendanceRecord, ColumnKind};
use crate::models::schema::columns::{
    AVG_WORKING_PER_DAY, LATE_ARRIVAL, NAME, ON_TIME, TOTAL_DELAY, TOTAL_OVERTIME,
    TOTAL_WORKING_HOURS,
};
use crate::utils::time::format_hms;
use crate::utils::{count, fixed2};
use chrono::TimeDelta;
use std::cmp::Ordering;

/// A per-employee table row with a fixed column set.
pub trait Projection {
    const COLUMNS: &'static [&'static str];
    const KINDS: &'static [ColumnKind];

    fn from_record(record: &AttendanceRecord) -> Self;

    /// Value the ranking sorts on, as displayed.
    fn metric(&self) -> f64;

    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeRow {
    pub name: String,
    pub working_hours: f64,
    pub avg_working_per_day: Option<TimeDelta>,
    pub overtime_hours: f64,
}

impl Projection for OvertimeRow {
    const COLUMNS: &'static [&'static str] =
        &[NAME, TOTAL_WORKING_HOURS, AVG_WORKING_PER_DAY, TOTAL_OVERTIME];
    const KINDS: &'static [ColumnKind] = &[
        ColumnKind::Text,
        ColumnKind::Hours,
        ColumnKind::Text,
        ColumnKind::Hours,
    ];

    fn from_record(r: &AttendanceRecord) -> Self {
        Self {
            name: r.name.clone(),
            working_hours: r.working_hours(),
            avg_working_per_day: r.avg_working_per_day,
            overtime_hours: r.overtime_hours(),
        }
    }

    fn metric(&self) -> f64 {
        self.overtime_hours
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            fixed2(self.working_hours),
            self.avg_working_per_day
                .map(|d| format_hms(d.num_seconds()))
                .unwrap_or_else(|| "--".to_string()),
            fixed2(self.overtime_hours),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DelayRow {
    pub name: String,
    pub late_arrival: f64,
    pub delay_hours: f64,
}

impl Projection for DelayRow {
    const COLUMNS: &'static [&'static str] = &[NAME, LATE_ARRIVAL, TOTAL_DELAY];
    const KINDS: &'static [ColumnKind] =
        &[ColumnKind::Text, ColumnKind::Count, ColumnKind::Hours];

    fn from_record(r: &AttendanceRecord) -> Self {
        Self {
            name: r.name.clone(),
            late_arrival: r.late_arrival,
            delay_hours: r.delay_hours(),
        }
    }

    fn metric(&self) -> f64 {
        self.delay_hours
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            count(self.late_arrival),
            fixed2(self.delay_hours),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnTimeRow {
    pub name: String,
    pub on_time: f64,
}

impl Projection for OnTimeRow {
    const COLUMNS: &'static [&'static str] = &[NAME, ON_TIME];
    const KINDS: &'static [ColumnKind] = &[ColumnKind::Text, ColumnKind::Count];

    fn from_record(r: &AttendanceRecord) -> Self {
        Self {
            name: r.name.clone(),
            on_time: r.on_time_count,
        }
    }

    fn metric(&self) -> f64 {
        self.on_time
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), count(self.on_time)]
    }
}

/// The N highest items by `key`, descending; ties keep input order.
pub fn top_n_by<T, F>(mut items: Vec<T>, n: usize, key: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    // sort_by is stable
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    items.truncate(n);
    items
}

/// Project every record onto `P` and keep the top `n` by `P::metric`.
pub fn top_n<P: Projection>(records: &[AttendanceRecord], n: usize) -> Vec<P> {
    let projected: Vec<P> = records.iter().map(P::from_record).collect();
    top_n_by(projected, n, P::metric)
}

pub fn rows_of<P: Projection>(rows: &[P]) -> Vec<Vec<String>> {
    rows.iter().map(P::cells).collect()
}

pub fn top_overtime(records: &[AttendanceRecord], n: usize) -> Vec<OvertimeRow> {
    top_n(records, n)
}

pub fn top_delay(records: &[AttendanceRecord], n: usize) -> Vec<DelayRow> {
    top_n(records, n)
}

pub fn top_on_time(records: &[AttendanceRecord], n: usize) -> Vec<OnTimeRow> {
    top_n(records, n)
}
