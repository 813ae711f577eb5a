mod common;

use attreport::errors::AppError;
use attreport::models::schema::{REQUIRED_COLUMNS, load_csv_file, read_csv};
use attreport::utils::time::{decimal_hours, format_hms, parse_duration, parse_time_of_day};
use chrono::TimeDelta;
use common::{SAMPLE_CSV, hms, record, write_csv};

fn header() -> String {
    REQUIRED_COLUMNS.join(",")
}

fn row(fields: &[(&str, &str)]) -> String {
    REQUIRED_COLUMNS
        .iter()
        .map(|c| {
            fields
                .iter()
                .find(|(name, _)| name == c)
                .map(|(_, v)| v.to_string())
                .unwrap_or_else(|| default_cell(c).to_string())
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn default_cell(column: &str) -> &'static str {
    match column {
        "Id" => "1",
        "Name" => "Alice",
        "Dept" => "Engineering",
        "Sub Dept" => "Backend",
        "Total working hours" | "Total Over time" | "Total Delys hours" => "01:00:00",
        "Avg Check in" => "09:00:00",
        "AVG Check out" => "17:00:00",
        "month" => "3",
        "Year" => "2025",
        "Working Days" | "Total working days" => "22",
        _ => "0",
    }
}

#[test]
fn test_sample_csv_parses_into_typed_records() {
    let set = read_csv(SAMPLE_CSV.as_bytes()).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.month(), 3);
    assert_eq!(set.year(), 2025);

    let carol = &set.records()[2];
    assert_eq!(carol.name, "Carol");
    assert_eq!(carol.sub_department, "Frontend");
    assert_eq!(carol.not_found_days, -1);
    assert_eq!(carol.total_working_hours, TimeDelta::hours(168));
    assert_eq!(carol.avg_working_per_day, Some(TimeDelta::hours(8)));
    assert_eq!(carol.avg_check_in, hms(8, 30, 0));
}

#[test]
fn test_headers_and_cells_are_trimmed() {
    let header = REQUIRED_COLUMNS
        .iter()
        .map(|c| format!(" {c} "))
        .collect::<Vec<_>>()
        .join(",");
    let csv = format!("{header}\n{}\n", row(&[("Name", "  Bob  ")]));

    let set = read_csv(csv.as_bytes()).unwrap();
    assert_eq!(set.records()[0].name, "Bob");
    assert_eq!(set.records()[0].avg_working_per_day, None);
}

#[test]
fn test_missing_columns_are_listed() {
    let header: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| *c != "NO.H" && *c != "Year")
        .collect();
    let csv = format!("{}\n", header.join(","));

    match read_csv(csv.as_bytes()) {
        Err(AppError::SchemaMismatch(msg)) => {
            assert!(msg.contains("'NO.H'"));
            assert!(msg.contains("'Year'"));
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn test_header_only_is_empty_record_set() {
    let csv = format!("{}\n,,,\n", header());
    assert!(matches!(
        read_csv(csv.as_bytes()),
        Err(AppError::EmptyRecordSet)
    ));
}

#[test]
fn test_malformed_cells_name_the_field() {
    let cases = [
        ("Working Days", "twenty", "Working Days"),
        ("Working Days", "21.5", "Working Days"),
        ("Working Days", "-1", "Working Days"),
        ("NO.H", "abc", "NO.H"),
        ("Total Over time", "5 hours", "Total Over time"),
        ("Avg Check in", "25:00:00", "Avg Check in"),
        ("month", "13", "month"),
        ("Name", "", "Name"),
    ];

    for (column, value, expected_field) in cases {
        let csv = format!("{}\n{}\n", header(), row(&[(column, value)]));
        match read_csv(csv.as_bytes()) {
            Err(AppError::MalformedRecord { row, field, .. }) => {
                assert_eq!(row, 1, "{column}={value}");
                assert_eq!(field, expected_field, "{column}={value}");
            }
            other => panic!("{column}={value}: expected malformed record, got {other:?}"),
        }
    }
}

#[test]
fn test_spreadsheet_float_integers_are_accepted() {
    let csv = format!(
        "{}\n{}\n",
        header(),
        row(&[("Working Days", "22.0"), ("Not Found days", "-2.0")])
    );

    let set = read_csv(csv.as_bytes()).unwrap();
    assert_eq!(set.records()[0].working_days, 22);
    assert_eq!(set.records()[0].not_found_days, -2);
}

#[test]
fn test_mixed_periods_are_rejected() {
    let csv = format!(
        "{}\n{}\n{}\n",
        header(),
        row(&[]),
        row(&[("Id", "2"), ("month", "4")])
    );

    match read_csv(csv.as_bytes()) {
        Err(AppError::MalformedRecord { row, field, .. }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "month");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let a = record("7", "A");
    let b = record("7", "B");

    match attreport::models::RecordSet::new(vec![a, b]) {
        Err(AppError::MalformedRecord { row, field, .. }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "Id");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn test_period_error_counts_blank_rows() {
    let blank = ",".repeat(REQUIRED_COLUMNS.len() - 1);
    let csv = format!(
        "{}\n{}\n{}\n{}\n",
        header(),
        row(&[]),
        blank,
        row(&[("Id", "2"), ("month", "4")])
    );

    match read_csv(csv.as_bytes()) {
        Err(AppError::MalformedRecord { row, field, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(field, "month");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn test_duplicate_id_error_counts_empty_lines() {
    let csv = format!(
        "{}\n{}\n\n{}\n{}\n",
        header(),
        row(&[]),
        row(&[("Id", "2")]),
        row(&[("Id", "1"), ("Name", "Bob")])
    );

    match read_csv(csv.as_bytes()) {
        Err(AppError::MalformedRecord { row, field, reason }) => {
            assert_eq!(row, 4);
            assert_eq!(field, "Id");
            assert!(reason.contains("duplicates row 1"), "{reason}");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn test_cell_error_and_period_error_share_row_numbers() {
    let blank = ",".repeat(REQUIRED_COLUMNS.len() - 1);
    let csv = format!(
        "{}\n{}\n{}\n{}\n",
        header(),
        row(&[]),
        blank,
        row(&[("Id", "2"), ("NO.H", "abc")])
    );

    match read_csv(csv.as_bytes()) {
        Err(AppError::MalformedRecord { row, field, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(field, "NO.H");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn test_load_csv_file_reads_from_disk() {
    let path = write_csv("schema_load_file", SAMPLE_CSV);
    let set = load_csv_file(&path).unwrap();
    assert_eq!(set.first().name, "Alice");
}

#[test]
fn test_duration_shapes() {
    assert_eq!(parse_duration("08:30:00").unwrap(), TimeDelta::minutes(510));
    assert_eq!(parse_duration("8:30").unwrap(), TimeDelta::minutes(510));
    assert_eq!(parse_duration("176:30:00").unwrap(), TimeDelta::minutes(176 * 60 + 30));
    assert_eq!(
        parse_duration("1 day 02:00:00").unwrap(),
        TimeDelta::hours(26)
    );
    assert_eq!(
        parse_duration("3 days, 04:00:00").unwrap(),
        TimeDelta::hours(76)
    );
    assert_eq!(
        parse_duration("00:00:01.5").unwrap(),
        TimeDelta::milliseconds(1500)
    );
    assert_eq!(parse_duration("2 days").unwrap(), TimeDelta::hours(48));

    for bad in ["", "-01:00:00", "01:60:00", "1:2:3:4", "abc", "01:00:xx"] {
        assert!(parse_duration(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_time_of_day_and_formatting() {
    assert_eq!(parse_time_of_day("08:05").unwrap(), hms(8, 5, 0));
    assert_eq!(parse_time_of_day(" 17:45:30 ").unwrap(), hms(17, 45, 30));
    assert!(parse_time_of_day("24:00:00").is_err());

    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(90_061), "25:01:01");
}

#[test]
fn test_decimal_hours_uses_days_and_seconds() {
    let d = TimeDelta::days(2) + TimeDelta::minutes(45);
    assert_eq!(decimal_hours(d), 48.75);
    // sub-second precision is dropped
    assert_eq!(decimal_hours(TimeDelta::milliseconds(3_600_999)), 1.0);
}
