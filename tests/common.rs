#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attreport::models::{AttendanceRecord, RecordSet};
use chrono::{NaiveTime, TimeDelta};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn attr() -> Command {
    cargo_bin_cmd!("attreport")
}

/// Four employees, March 2025, 21 working days.
///
/// Expected figures: attendance 70 of 84 days (83.33 %), on-site 51 days,
/// remote 17 days, average check-in 09:07:30, check-out 17:17:30.
pub const SAMPLE_CSV: &str = "\
Id,Name,Dept,Sub Dept,Working Days,Remote Days,On site days,permission Days,NO.H,Not Found days,Total working hours,AVG working per day,Total Over time,total on time,total out time,Total Delys hours,Avg Check in,AVG Check out,month,Year,Total working days
1,Alice,Engineering,Backend,21,5,15,1,0,0,168:00:00,08:00:00,12:30:00,18,3,01:15:00,08:50:00,17:10:00,3,2025,21
2,Bob,Engineering,Backend,21,0,18,0,1,2,150:00:00,07:30:00,2:00:00,10,8,06:00:00,09:10:00,17:30:00,3,2025,21
3,Carol,Engineering,Frontend,21,10,11,0,0,-1,7 days 00:00:00,08:00:00,20:00:00,20,1,00:30:00,08:30:00,16:30:00,3,2025,21
4,Dan,Sales,Field,21,2,7,2,0,12,100:00:00,06:00:00,00:00:00,5,12,10:45:00,10:00:00,18:00:00,3,2025,21
";

/// A fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("attreport_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` as `<temp>/<name>/attendance.csv`
pub fn write_csv(name: &str, content: &str) -> PathBuf {
    let path = temp_dir(name).join("attendance.csv");
    fs::write(&path, content).expect("write csv");
    path
}

/// Config path that does not exist, so defaults apply.
pub fn no_config(dir: &std::path::Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

/// A March 2025 record with 22 working days, all spent on site.
pub fn record(id: &str, name: &str) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: id.to_string(),
        name: name.to_string(),
        department: "Engineering".to_string(),
        sub_department: "Backend".to_string(),
        working_days: 22,
        on_site_days: 22,
        total_working_hours: TimeDelta::hours(176),
        avg_check_in: hms(9, 0, 0),
        avg_check_out: hms(17, 0, 0),
        month: 3,
        year: 2025,
        total_working_days_in_month: 22,
        ..Default::default()
    }
}

pub fn record_set(records: Vec<AttendanceRecord>) -> RecordSet {
    RecordSet::new(records).expect("valid record set")
}

pub fn sample_set() -> RecordSet {
    attreport::models::schema::read_csv(SAMPLE_CSV.as_bytes()).expect("sample csv parses")
}
