//! Report assembler: orders and labels calculator results. No arithmetic
//! happens here beyond formatting values for display.

use crate::core::calculator::anomaly::{AnomalySummary, FINGERPRINT_COLUMNS, FINGERPRINT_KINDS};
use crate::core::calculator::grouping::{GROUP_COLUMNS, GroupTimes};
use crate::core::calculator::metrics::MonthlyMetrics;
use crate::core::calculator::ranking::{DelayRow, OnTimeRow, OvertimeRow, Projection, rows_of};
use crate::models::{Report, ReportSection, TableSection};
use crate::utils::{count, fixed2, format_time};

/// Statement labels and table captions, in document order.
pub mod labels {
    pub const OBJECTIVE: &str = "Objective";
    pub const TIMEFRAME: &str = "Timeframe";
    pub const WORKING_DAYS: &str = "Total number of working days";
    pub const ATTENDANCE: &str = "Overall attendance percentage";
    pub const ON_SITE_VS_REMOTE: &str = "On Site VS Remotely";
    pub const CHECK_TIMES: &str = "Average check-in and check-out";
    pub const DEPARTMENT_TIMES: &str = "AVG Check in and Check out for every Department";
    pub const WORKING_HOURS: &str = "Total Working Hours";
    pub const OVERTIME: &str = "Total Over Time";
    pub const PERMISSIONS: &str = "Total number of permissions";
    pub const DELAYING: &str = "Total number of Delaying";
    pub const NOT_FOUND: &str = "Number of employees have Not found days";
    pub const FINGERPRINT: &str = "Employees: Fingerprint Authentication Issues";
}

/// A ranking together with the N it was cut to.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub limit: usize,
    pub rows: Vec<T>,
}

/// Every result the report is made of.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub metrics: MonthlyMetrics,
    pub department_times: Vec<GroupTimes>,
    pub top_overtime: Ranked<OvertimeRow>,
    pub top_delay: Ranked<DelayRow>,
    pub top_on_time: Ranked<OnTimeRow>,
    pub anomalies: AnomalySummary,
}

fn ranked_table<P: Projection>(caption: String, ranked: &Ranked<P>) -> ReportSection {
    ReportSection::Table(
        TableSection::new(caption, P::COLUMNS, rows_of(&ranked.rows)).with_kinds(P::KINDS),
    )
}

pub fn assemble(data: &ReportData) -> Report {
    let m = &data.metrics;
    let period = format!("{} {}", m.period.month_name, m.period.year);

    let sections = vec![
        ReportSection::statement(
            labels::OBJECTIVE,
            format!(
                "To provide a summary of employee attendance, performance, and discipline for {period}."
            ),
        ),
        ReportSection::statement(
            labels::TIMEFRAME,
            format!(
                "from 1 {} to {} {period}.",
                m.period.month_name, m.period.last_day
            ),
        ),
        ReportSection::statement(
            labels::WORKING_DAYS,
            format!("{} days.", m.period.total_working_days),
        ),
        ReportSection::emphasized(
            labels::ATTENDANCE,
            format!("{} %.", fixed2(m.attendance.attendance_pct)),
        ),
        ReportSection::statement(
            labels::ON_SITE_VS_REMOTE,
            format!(
                "{} % ({} employee per day) VS {} % ({} employee per day)",
                fixed2(m.work_mode.on_site_pct),
                m.work_mode.on_site_per_day,
                fixed2(m.work_mode.remote_pct),
                m.work_mode.remote_per_day
            ),
        ),
        ReportSection::statement(
            labels::CHECK_TIMES,
            format!(
                "{} VS {}",
                format_time(m.check_times.check_in),
                format_time(m.check_times.check_out)
            ),
        ),
        ReportSection::Table(TableSection::new(
            labels::DEPARTMENT_TIMES,
            &GROUP_COLUMNS,
            data.department_times.iter().map(GroupTimes::cells).collect(),
        )),
        ReportSection::statement(
            labels::WORKING_HOURS,
            format!("{} Hour", fixed2(m.total_working_hours)),
        ),
        ReportSection::statement(
            labels::OVERTIME,
            format!("{} Hour", fixed2(m.total_overtime_hours)),
        ),
        ranked_table(
            format!(
                "Top {} Employees by Performance Over Time",
                data.top_overtime.limit
            ),
            &data.top_overtime,
        ),
        ReportSection::statement(labels::PERMISSIONS, m.total_permissions.to_string()),
        ReportSection::statement(labels::DELAYING, count(m.total_delay)),
        ranked_table(
            format!("Top {} Employees with Delays by Hours", data.top_delay.limit),
            &data.top_delay,
        ),
        ranked_table(
            format!("Top {} Employees on time", data.top_on_time.limit),
            &data.top_on_time,
        ),
        ReportSection::emphasized(labels::NOT_FOUND, data.anomalies.not_found_count.to_string()),
        ReportSection::Table(
            TableSection::new(
                labels::FINGERPRINT,
                &FINGERPRINT_COLUMNS,
                data.anomalies
                    .fingerprint_issues
                    .iter()
                    .map(|f| f.cells())
                    .collect(),
            )
            .with_kinds(&FINGERPRINT_KINDS),
        ),
    ];

    Report {
        title: format!("Attendance and Check-in Analysis - {period}"),
        period_label: period,
        month_name: m.period.month_name.to_string(),
        year: m.period.year,
        sections,
    }
}
