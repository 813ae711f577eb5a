//! Sheet schema and ingestion.
//!
//! The header is validated once; every row is then converted into a typed
//! [`AttendanceRecord`]. The resulting [`RecordSet`] is non-empty, shares a
//! single reporting period and is never mutated afterwards.

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::utils::time::{parse_duration, parse_time_of_day};
use chrono::{NaiveTime, TimeDelta};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub mod columns {
    pub const ID: &str = "Id";
    pub const NAME: &str = "Name";
    pub const DEPT: &str = "Dept";
    pub const SUB_DEPT: &str = "Sub Dept";
    pub const WORKING_DAYS: &str = "Working Days";
    pub const REMOTE_DAYS: &str = "Remote Days";
    pub const ON_SITE_DAYS: &str = "On site days";
    pub const PERMISSION_DAYS: &str = "permission Days";
    pub const OFF_HOURS: &str = "NO.H";
    pub const NOT_FOUND_DAYS: &str = "Not Found days";
    pub const TOTAL_WORKING_HOURS: &str = "Total working hours";
    pub const AVG_WORKING_PER_DAY: &str = "AVG working per day";
    pub const TOTAL_OVERTIME: &str = "Total Over time";
    pub const ON_TIME: &str = "total on time";
    pub const LATE_ARRIVAL: &str = "total out time";
    pub const TOTAL_DELAY: &str = "Total Delys hours";
    pub const AVG_CHECK_IN: &str = "Avg Check in";
    pub const AVG_CHECK_OUT: &str = "AVG Check out";
    pub const MONTH: &str = "month";
    pub const YEAR: &str = "Year";
    pub const TOTAL_WORKING_DAYS: &str = "Total working days";
}

use columns::*;

/// Columns every source must provide, in sheet order.
pub const REQUIRED_COLUMNS: [&str; 20] = [
    ID,
    NAME,
    DEPT,
    SUB_DEPT,
    WORKING_DAYS,
    REMOTE_DAYS,
    ON_SITE_DAYS,
    PERMISSION_DAYS,
    OFF_HOURS,
    NOT_FOUND_DAYS,
    TOTAL_WORKING_HOURS,
    TOTAL_OVERTIME,
    ON_TIME,
    LATE_ARRIVAL,
    TOTAL_DELAY,
    AVG_CHECK_IN,
    AVG_CHECK_OUT,
    MONTH,
    YEAR,
    TOTAL_WORKING_DAYS,
];

/// Column positions resolved from the header row.
#[derive(Debug)]
pub struct HeaderIndex {
    positions: HashMap<&'static str, usize>,
}

impl HeaderIndex {
    /// Resolve the required columns; all missing names are reported at once.
    pub fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let found: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim(), i))
            .collect();

        let mut positions = HashMap::new();
        let mut missing = Vec::new();

        for name in REQUIRED_COLUMNS {
            match found.get(name) {
                Some(&i) => {
                    positions.insert(name, i);
                }
                None => missing.push(format!("'{name}'")),
            }
        }

        if !missing.is_empty() {
            return Err(AppError::SchemaMismatch(missing.join(", ")));
        }

        if let Some(&i) = found.get(AVG_WORKING_PER_DAY) {
            positions.insert(AVG_WORKING_PER_DAY, i);
        }

        Ok(Self { positions })
    }

    fn has(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }
}

/// Field access for one data row, carrying the row number for errors.
struct RowReader<'a> {
    row: usize,
    record: &'a StringRecord,
    index: &'a HeaderIndex,
}

impl RowReader<'_> {
    fn raw(&self, column: &str) -> AppResult<&str> {
        let value = self
            .index
            .positions
            .get(column)
            .and_then(|&i| self.record.get(i))
            .map(str::trim)
            .unwrap_or("");

        if value.is_empty() {
            return Err(AppError::malformed(self.row, column, "is missing"));
        }
        Ok(value)
    }

    fn text(&self, column: &str) -> AppResult<String> {
        self.raw(column).map(str::to_string)
    }

    /// Integers; spreadsheet exports may print them as `22.0`.
    fn integer(&self, column: &str) -> AppResult<i64> {
        let raw = self.raw(column)?;
        if let Ok(v) = raw.parse::<i64>() {
            return Ok(v);
        }

        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                Ok(v as i64)
            }
            _ => Err(AppError::malformed(
                self.row,
                column,
                format!("is not an integer: '{raw}'"),
            )),
        }
    }

    fn non_negative_integer(&self, column: &str) -> AppResult<i64> {
        let v = self.integer(column)?;
        if v < 0 {
            return Err(AppError::malformed(
                self.row,
                column,
                format!("must not be negative: {v}"),
            ));
        }
        Ok(v)
    }

    fn decimal(&self, column: &str) -> AppResult<f64> {
        let raw = self.raw(column)?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(AppError::malformed(
                self.row,
                column,
                format!("is not a number: '{raw}'"),
            )),
        }
    }

    fn non_negative_decimal(&self, column: &str) -> AppResult<f64> {
        let v = self.decimal(column)?;
        if v < 0.0 {
            return Err(AppError::malformed(
                self.row,
                column,
                format!("must not be negative: {v}"),
            ));
        }
        Ok(v)
    }

    fn duration(&self, column: &str) -> AppResult<TimeDelta> {
        let raw = self.raw(column)?;
        parse_duration(raw).map_err(|_| {
            AppError::malformed(self.row, column, format!("is not a valid duration: '{raw}'"))
        })
    }

    fn time_of_day(&self, column: &str) -> AppResult<NaiveTime> {
        let raw = self.raw(column)?;
        parse_time_of_day(raw).map_err(|_| {
            AppError::malformed(self.row, column, format!("is not a valid time: '{raw}'"))
        })
    }

    fn parse(&self) -> AppResult<AttendanceRecord> {
        let month = self.integer(MONTH)?;
        if !(1..=12).contains(&month) {
            return Err(AppError::malformed(
                self.row,
                MONTH,
                format!("must be between 1 and 12: {month}"),
            ));
        }

        let year = self.integer(YEAR)?;
        let year = i32::try_from(year)
            .map_err(|_| AppError::malformed(self.row, YEAR, format!("out of range: {year}")))?;

        let avg_working_per_day = if self.index.has(AVG_WORKING_PER_DAY) {
            // optional column: blank cells are tolerated
            match self.raw(AVG_WORKING_PER_DAY) {
                Ok(_) => Some(self.duration(AVG_WORKING_PER_DAY)?),
                Err(_) => None,
            }
        } else {
            None
        };

        Ok(AttendanceRecord {
            employee_id: self.text(ID)?,
            name: self.text(NAME)?,
            department: self.text(DEPT)?,
            sub_department: self.text(SUB_DEPT)?,
            working_days: self.non_negative_integer(WORKING_DAYS)?,
            remote_days: self.non_negative_integer(REMOTE_DAYS)?,
            on_site_days: self.non_negative_integer(ON_SITE_DAYS)?,
            permission_days: self.non_negative_integer(PERMISSION_DAYS)?,
            off_hours: self.non_negative_decimal(OFF_HOURS)?,
            not_found_days: self.integer(NOT_FOUND_DAYS)?,
            total_working_hours: self.duration(TOTAL_WORKING_HOURS)?,
            avg_working_per_day,
            total_overtime: self.duration(TOTAL_OVERTIME)?,
            total_delay: self.duration(TOTAL_DELAY)?,
            on_time_count: self.non_negative_decimal(ON_TIME)?,
            late_arrival: self.non_negative_decimal(LATE_ARRIVAL)?,
            avg_check_in: self.time_of_day(AVG_CHECK_IN)?,
            avg_check_out: self.time_of_day(AVG_CHECK_OUT)?,
            month: month as u32,
            year,
            total_working_days_in_month: self.non_negative_integer(TOTAL_WORKING_DAYS)?,
        })
    }
}

/// Validated, immutable collection of one month's records.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<AttendanceRecord>,
}

impl RecordSet {
    /// Wrap already-typed records, enforcing the record-set invariants:
    /// at least one record, unique ids, one shared (month, year).
    /// Errors number rows by their position in `records`, starting at 1.
    pub fn new(records: Vec<AttendanceRecord>) -> AppResult<Self> {
        Self::from_rows(records.into_iter().enumerate().map(|(i, r)| (i + 1, r)).collect())
    }

    /// Same checks, with each record tagged by its source data row.
    pub(crate) fn from_rows(rows: Vec<(usize, AttendanceRecord)>) -> AppResult<Self> {
        let (_, first) = rows.first().ok_or(AppError::EmptyRecordSet)?;
        let (month, year) = (first.month, first.year);

        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (row, r) in &rows {
            let row = *row;

            if r.month != month {
                return Err(AppError::malformed(
                    row,
                    MONTH,
                    format!("differs from the report period ({} vs {month})", r.month),
                ));
            }
            if r.year != year {
                return Err(AppError::malformed(
                    row,
                    YEAR,
                    format!("differs from the report period ({} vs {year})", r.year),
                ));
            }

            if let Some(prev) = seen.insert(r.employee_id.as_str(), row) {
                return Err(AppError::malformed(
                    row,
                    ID,
                    format!("'{}' duplicates row {prev}", r.employee_id),
                ));
            }
        }

        Ok(Self {
            records: rows.into_iter().map(|(_, r)| r).collect(),
        })
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record; always present by construction.
    pub fn first(&self) -> &AttendanceRecord {
        &self.records[0]
    }

    pub fn month(&self) -> u32 {
        self.first().month
    }

    pub fn year(&self) -> i32 {
        self.first().year
    }
}

/// Read and validate CSV data (header row first).
pub fn read_csv<R: Read>(reader: R) -> AppResult<RecordSet> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let index = HeaderIndex::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;

        // data row = file line minus the header line; the csv reader drops
        // empty lines without yielding a record
        let data_row = row
            .position()
            .and_then(|p| usize::try_from(p.line()).ok())
            .map_or(i + 1, |line| line.saturating_sub(1).max(1));

        // sheet exports often end with blank rows
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let reader = RowReader {
            row: data_row,
            record: &row,
            index: &index,
        };
        rows.push((data_row, reader.parse()?));
    }

    debug!(rows = rows.len(), "parsed attendance rows");
    RecordSet::from_rows(rows)
}

/// Read and validate a local CSV file.
pub fn load_csv_file(path: &Path) -> AppResult<RecordSet> {
    let file = File::open(path)?;
    read_csv(file)
}
