mod common;

use attreport::core::calculator::metrics::{
    average_check_times, compute, overall_attendance, period_summary, total_delay_measure,
    total_overtime_hours, total_permissions, total_working_hours, work_mode_split,
};
use attreport::errors::AppError;
use attreport::models::RecordSet;
use chrono::TimeDelta;
use common::{hms, record, record_set, sample_set};

#[test]
fn test_overall_attendance_three_records() {
    let mut a = record("1", "A");
    let mut b = record("2", "B");
    let mut c = record("3", "C");
    a.off_hours = 0.0;
    b.off_hours = 1.0;
    c.not_found_days = 2;

    let summary = overall_attendance(&[a, b, c]).expect("attendance");
    assert_eq!(summary.scheduled_days, 66);
    assert_eq!(summary.attendance, 63.0);
    assert_eq!(summary.attendance_pct, 95.45);
}

#[test]
fn test_attendance_never_exceeds_scheduled_days() {
    // a handful of non-negative combinations
    let cases: [(i64, f64, i64); 6] = [
        (22, 0.0, 0),
        (22, 3.5, 1),
        (0, 0.0, 0),
        (10, 10.0, 0),
        (15, 0.25, 15),
        (1, 0.0, 1),
    ];

    let records: Vec<_> = cases
        .iter()
        .enumerate()
        .map(|(i, (wd, off, nf))| {
            let mut r = record(&i.to_string(), "X");
            r.working_days = *wd;
            r.off_hours = *off;
            r.not_found_days = *nf;
            r
        })
        .collect();

    for n in 1..=records.len() {
        let slice = &records[..n];
        let s = overall_attendance(slice).expect("working days are never all zero here");
        assert!(s.attendance <= s.scheduled_days as f64);
        assert!((0.0..=100.0).contains(&s.attendance_pct));
    }
}

#[test]
fn test_zero_working_days_is_division_by_zero() {
    let mut a = record("1", "A");
    a.working_days = 0;

    let err = overall_attendance(&[a]).unwrap_err();
    assert!(matches!(err, AppError::DivisionByZero(_)));
}

#[test]
fn test_empty_input_is_empty_record_set() {
    assert!(matches!(
        overall_attendance(&[]),
        Err(AppError::EmptyRecordSet)
    ));
    assert!(matches!(
        RecordSet::new(Vec::new()),
        Err(AppError::EmptyRecordSet)
    ));
    assert!(matches!(
        average_check_times(&[]),
        Err(AppError::EmptyRecordSet)
    ));
}

#[test]
fn test_work_mode_split_is_relative_to_attendance() {
    let set = sample_set();
    let records = set.records();
    let attendance = overall_attendance(records).unwrap();

    let split = work_mode_split(records, &attendance, 21).unwrap();
    assert_eq!(split.on_site_pct, 72.86);
    assert_eq!(split.remote_pct, 24.29);
    assert_eq!(split.on_site_per_day, 2);
    assert_eq!(split.remote_per_day, 1);
    // computed independently: no need to sum to 100
    assert!(split.on_site_pct + split.remote_pct < 100.0);
}

#[test]
fn test_work_mode_split_above_one_hundred_does_not_fail() {
    // on-site + remote days exceed attendance: a data-quality defect
    let mut a = record("1", "A");
    a.working_days = 10;
    a.off_hours = 5.0;
    a.on_site_days = 8;
    a.remote_days = 7;

    let attendance = overall_attendance(std::slice::from_ref(&a)).unwrap();
    assert_eq!(attendance.attendance, 5.0);

    let split = work_mode_split(&[a], &attendance, 10).unwrap();
    assert_eq!(split.on_site_pct, 160.0);
    assert_eq!(split.remote_pct, 140.0);
}

#[test]
fn test_work_mode_split_zero_denominators() {
    let mut a = record("1", "A");
    a.working_days = 2;
    a.off_hours = 2.0;
    let attendance = overall_attendance(std::slice::from_ref(&a)).unwrap();
    assert!(matches!(
        work_mode_split(std::slice::from_ref(&a), &attendance, 22),
        Err(AppError::DivisionByZero(_))
    ));

    let b = record("2", "B");
    let attendance = overall_attendance(std::slice::from_ref(&b)).unwrap();
    assert!(matches!(
        work_mode_split(&[b], &attendance, 0),
        Err(AppError::DivisionByZero(_))
    ));
}

#[test]
fn test_per_day_headcount_rounds_half_to_even() {
    let mut a = record("1", "A");
    a.on_site_days = 5;
    a.remote_days = 15;
    let attendance = overall_attendance(std::slice::from_ref(&a)).unwrap();

    // 5 / 2 = 2.5 → 2, 15 / 2 = 7.5 → 8
    let split = work_mode_split(&[a], &attendance, 2).unwrap();
    assert_eq!(split.on_site_per_day, 2);
    assert_eq!(split.remote_per_day, 8);
}

#[test]
fn test_average_check_time_of_single_record_is_identity() {
    let mut a = record("1", "A");
    a.avg_check_in = hms(8, 47, 13);
    a.avg_check_out = hms(16, 59, 59);

    let times = average_check_times(&[a]).unwrap();
    assert_eq!(times.check_in, hms(8, 47, 13));
    assert_eq!(times.check_out, hms(16, 59, 59));
}

#[test]
fn test_average_check_time_is_truncated_linear_mean() {
    let mut a = record("1", "A");
    let mut b = record("2", "B");
    a.avg_check_in = hms(8, 0, 0);
    b.avg_check_in = hms(8, 0, 1);

    let times = average_check_times(&[a, b]).unwrap();
    // 08:00:00.5 → 08:00:00
    assert_eq!(times.check_in, hms(8, 0, 0));

    let set = sample_set();
    let times = average_check_times(set.records()).unwrap();
    assert_eq!(times.check_in, hms(9, 7, 30));
    assert_eq!(times.check_out, hms(17, 17, 30));
}

#[test]
fn test_hour_totals_convert_to_decimal_hours() {
    let mut a = record("1", "A");
    let mut b = record("2", "B");
    a.total_working_hours = TimeDelta::days(1) + TimeDelta::minutes(30);
    b.total_working_hours = TimeDelta::hours(7) + TimeDelta::minutes(20);
    a.total_overtime = TimeDelta::minutes(10);
    b.total_overtime = TimeDelta::zero();

    let records = [a, b];
    // 24.5 + 7.333 = 31.833
    assert_eq!(total_working_hours(&records), 31.83);
    assert_eq!(total_overtime_hours(&records), 0.17);

    let set = sample_set();
    assert_eq!(total_working_hours(set.records()), 586.0);
    assert_eq!(total_overtime_hours(set.records()), 34.5);
}

#[test]
fn test_permissions_and_raw_delay_sum() {
    let set = sample_set();
    assert_eq!(total_permissions(set.records()), 3);
    // stored unit, no hour conversion
    assert_eq!(total_delay_measure(set.records()), 24.0);
}

#[test]
fn test_period_summary_uses_calendar_and_first_record() {
    let mut a = record("1", "A");
    a.month = 2;
    a.year = 2024;
    a.total_working_days_in_month = 21;
    let mut b = record("2", "B");
    b.month = 2;
    b.year = 2024;
    b.total_working_days_in_month = 99;

    let period = period_summary(&record_set(vec![a, b])).unwrap();
    assert_eq!(period.month_name, "February");
    assert_eq!(period.last_day, 29);
    assert_eq!(period.total_working_days, 21);
}

#[test]
fn test_compute_bundles_all_metrics() {
    let metrics = compute(&sample_set()).unwrap();

    assert_eq!(metrics.period.month_name, "March");
    assert_eq!(metrics.period.last_day, 31);
    assert_eq!(metrics.attendance.attendance, 70.0);
    assert_eq!(metrics.attendance.attendance_pct, 83.33);
    assert_eq!(metrics.total_permissions, 3);
    assert_eq!(metrics.total_delay, 24.0);
}

#[test]
fn test_last_day_of_month_at_calendar_edges() {
    use attreport::utils::date::last_day_of_month;

    assert_eq!(last_day_of_month(2024, 12), Some(31));
    assert_eq!(last_day_of_month(2023, 2), Some(28));
    assert_eq!(last_day_of_month(i32::MAX, 12), None);
    assert_eq!(last_day_of_month(2024, 13), None);
}

#[test]
fn test_year_outside_calendar_fails_without_panicking() {
    use attreport::core::{RankingLimits, generate_from_records};

    let csv = common::SAMPLE_CSV.replace(",3,2025,21", ",12,2147483647,21");
    let set = attreport::models::schema::read_csv(csv.as_bytes()).unwrap();
    assert_eq!(set.year(), i32::MAX);

    match generate_from_records(&set, &RankingLimits::default()) {
        Err(AppError::MalformedRecord { row, field, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(field, "Year");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}
