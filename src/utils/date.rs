use chrono::{Datelike, Month, NaiveDate};

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let m = u8::try_from(month).ok()?;
    Month::try_from(m).ok().map(|m| m.name())
}

/// Last calendar day of the given month (28 to 31). `None` when the month
/// or year lies outside the calendar chrono can represent.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }

    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    first_of_next.pred_opt().map(|d| d.day())
}
