use crate::utils::time::{decimal_hours, round2};
use chrono::{NaiveTime, TimeDelta};

/// One employee's attendance for the reporting month, as one sheet row.
///
/// Built only by the schema layer (`models::schema`), which validates every
/// field once; calculators read the typed fields and never look columns up
/// by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub sub_department: String,

    /// Scheduled days.
    pub working_days: i64,
    pub remote_days: i64,
    pub on_site_days: i64,
    /// Approved absence.
    pub permission_days: i64,
    /// Non-worked hours counted as absence ("NO.H").
    pub off_hours: f64,
    /// Days without a check-in/out signal. Negative values are a
    /// data-quality defect of the source system, not a real count.
    pub not_found_days: i64,

    pub total_working_hours: TimeDelta,
    pub avg_working_per_day: Option<TimeDelta>,
    pub total_overtime: TimeDelta,
    pub total_delay: TimeDelta,

    /// "total on time"
    pub on_time_count: f64,
    /// "total out time"
    pub late_arrival: f64,

    /// Pre-averaged by the data source.
    pub avg_check_in: NaiveTime,
    pub avg_check_out: NaiveTime,

    pub month: u32,
    pub year: i32,
    pub total_working_days_in_month: i64,
}

impl AttendanceRecord {
    pub fn working_hours(&self) -> f64 {
        round2(decimal_hours(self.total_working_hours))
    }

    pub fn overtime_hours(&self) -> f64 {
        round2(decimal_hours(self.total_overtime))
    }

    pub fn delay_hours(&self) -> f64 {
        round2(decimal_hours(self.total_delay))
    }
}
