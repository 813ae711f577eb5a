//! Check-in/check-out averages per (department, sub-department).

use crate::models::AttendanceRecord;
use crate::models::schema::columns::{AVG_CHECK_IN, AVG_CHECK_OUT, DEPT, SUB_DEPT};
use crate::utils::time::{format_time, mean_time_of_day};
use chrono::NaiveTime;
use std::collections::BTreeMap;
use tracing::debug;

pub const GROUP_COLUMNS: [&str; 4] = [DEPT, SUB_DEPT, AVG_CHECK_IN, AVG_CHECK_OUT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTimes {
    pub department: String,
    pub sub_department: String,
    pub avg_check_in: NaiveTime,
    pub avg_check_out: NaiveTime,
    pub members: usize,
}

impl GroupTimes {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.department.clone(),
            self.sub_department.clone(),
            format_time(self.avg_check_in),
            format_time(self.avg_check_out),
        ]
    }
}

/// One row per (department, sub-department), ordered lexicographically by
/// department then sub-department. Times are averaged the same way as the
/// overall figures.
pub fn grouped_check_times(records: &[AttendanceRecord]) -> Vec<GroupTimes> {
    let mut groups: BTreeMap<(&str, &str), Vec<&AttendanceRecord>> = BTreeMap::new();

    for r in records {
        groups
            .entry((r.department.as_str(), r.sub_department.as_str()))
            .or_default()
            .push(r);
    }

    debug!(groups = groups.len(), "grouped check times");

    groups
        .into_iter()
        .filter_map(|((dept, sub), members)| {
            Some(GroupTimes {
                department: dept.to_string(),
                sub_department: sub.to_string(),
                avg_check_in: mean_time_of_day(members.iter().map(|r| r.avg_check_in))?,
                avg_check_out: mean_time_of_day(members.iter().map(|r| r.avg_check_out))?,
                members: members.len(),
            })
        })
        .collect()
}
