//! End-to-end generation: request → record set → results → report.
//!
//! A request carries everything one generation needs; nothing is kept
//! between calls.

use crate::core::calculator::{anomaly, grouping, metrics, ranking};
use crate::core::report::{Ranked, ReportData, assemble};
use crate::errors::AppResult;
use crate::models::{RecordSet, Report};
use crate::source::DataSource;
use tracing::{debug, info};

/// N for each top-N table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    pub overtime: usize,
    pub delay: usize,
    pub on_time: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            overtime: 10,
            delay: 10,
            on_time: 15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub source: DataSource,
    pub sheet_name: String,
    pub limits: RankingLimits,
}

/// Run every calculator over the record set.
pub fn build_report_data(set: &RecordSet, limits: &RankingLimits) -> AppResult<ReportData> {
    let records = set.records();

    let data = ReportData {
        metrics: metrics::compute(set)?,
        department_times: grouping::grouped_check_times(records),
        top_overtime: Ranked {
            limit: limits.overtime,
            rows: ranking::top_overtime(records, limits.overtime),
        },
        top_delay: Ranked {
            limit: limits.delay,
            rows: ranking::top_delay(records, limits.delay),
        },
        top_on_time: Ranked {
            limit: limits.on_time,
            rows: ranking::top_on_time(records, limits.on_time),
        },
        anomalies: anomaly::analyze(records),
    };

    debug!(
        departments = data.department_times.len(),
        "report data ready"
    );
    Ok(data)
}

pub fn generate_from_records(set: &RecordSet, limits: &RankingLimits) -> AppResult<Report> {
    let data = build_report_data(set, limits)?;
    Ok(assemble(&data))
}

/// Load the requested source and build its report.
pub fn generate(request: &ReportRequest) -> AppResult<Report> {
    let set = request.source.load(&request.sheet_name)?;
    info!(
        records = set.len(),
        month = set.month(),
        year = set.year(),
        "generating report"
    );
    generate_from_records(&set, &request.limits)
}
