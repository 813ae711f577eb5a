//! Not-found-day anomalies (missing check-in/out signals).

use crate::core::calculator::ranking::top_n_by;
use crate::models::{AttendanceRecord, ColumnKind};
use crate::models::schema::columns::{NAME, NOT_FOUND_DAYS};
use tracing::debug;

/// Records below this many not-found days are defective data.
pub const NOT_FOUND_LOWER_BOUND: i64 = 0;
/// Records above this many not-found days point at fingerprint problems.
pub const NOT_FOUND_UPPER_BOUND: i64 = 9;

pub const FINGERPRINT_COLUMNS: [&str; 2] = [NAME, NOT_FOUND_DAYS];
pub const FINGERPRINT_KINDS: [ColumnKind; 2] = [ColumnKind::Text, ColumnKind::Count];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintIssue {
    pub name: String,
    pub not_found_days: i64,
}

impl FingerprintIssue {
    pub fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.not_found_days.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalySummary {
    /// Employees with any not-found days (positive or negative).
    pub not_found_count: usize,
    /// Sorted descending by not-found days.
    pub fingerprint_issues: Vec<FingerprintIssue>,
}

pub fn is_fingerprint_issue(not_found_days: i64) -> bool {
    not_found_days < NOT_FOUND_LOWER_BOUND || not_found_days > NOT_FOUND_UPPER_BOUND
}

pub fn not_found_count(records: &[AttendanceRecord]) -> usize {
    records.iter().filter(|r| r.not_found_days != 0).count()
}

pub fn fingerprint_issues(records: &[AttendanceRecord]) -> Vec<FingerprintIssue> {
    let flagged: Vec<FingerprintIssue> = records
        .iter()
        .filter(|r| is_fingerprint_issue(r.not_found_days))
        .map(|r| FingerprintIssue {
            name: r.name.clone(),
            not_found_days: r.not_found_days,
        })
        .collect();

    let n = flagged.len();
    top_n_by(flagged, n, |f| f.not_found_days as f64)
}

pub fn analyze(records: &[AttendanceRecord]) -> AnomalySummary {
    let summary = AnomalySummary {
        not_found_count: not_found_count(records),
        fingerprint_issues: fingerprint_issues(records),
    };

    debug!(
        not_found = summary.not_found_count,
        fingerprint = summary.fingerprint_issues.len(),
        "anomaly filter"
    );

    summary
}
