//! Calendar arithmetic on plain local dates.
//!
//! Months are 0-based (`0` is January) across this crate, as in the month
//! index of [`crate::matrix::MonthData`]. Inputs are expected to be in the
//! range of [`crate::routing::MIN_YEAR`]..=[`crate::routing::MAX_YEAR`].

use chrono::{Datelike, Local, NaiveDate};

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Index of Saturday in a Monday-first week.
pub const SATURDAY: u32 = 5;

/// Index of Sunday in a Monday-first week.
pub const SUNDAY: u32 = 6;

/// Gregorian leap year rule.
///
/// ```
/// use work_calendar::dates::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 0-based month.
///
/// ```
/// use work_calendar::dates::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1), 29);
/// assert_eq!(days_in_month(2023, 1), 28);
/// assert_eq!(days_in_month(2023, 11), 31);
/// ```
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    assert!(month0 < 12, "month index out of range: {month0}");

    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month0 as usize]
    }
}

/// Position of the date in a week starting on Monday (`0`) and ending on
/// Sunday (`6`).
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Saturdays and Sundays, given a Monday-first weekday index.
pub fn is_weekend(weekday_index: u32) -> bool {
    weekday_index == SATURDAY || weekday_index == SUNDAY
}

/// Compare two points in time by their calendar day only.
///
/// ```
/// use chrono::NaiveDate;
/// use work_calendar::dates::is_same_day;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// let morning = date.and_hms_opt(7, 30, 0).unwrap();
/// let evening = date.and_hms_opt(22, 0, 0).unwrap();
///
/// assert!(is_same_day(&morning, &evening));
/// assert!(is_same_day(&date, &evening));
/// assert!(!is_same_day(&date, &date.succ_opt().unwrap()));
/// ```
pub fn is_same_day(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year() && a.month0() == b.month0() && a.day() == b.day()
}

/// Render a date as `YYYY-MM-DD`, from a 0-based month.
///
/// ```
/// use work_calendar::dates::format_iso_date;
///
/// assert_eq!(format_iso_date(2024, 0, 5), "2024-01-05");
/// assert_eq!(format_iso_date(2024, 11, 31), "2024-12-31");
/// ```
pub fn format_iso_date(year: i32, month0: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month0 + 1)
}

/// Current date of the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current year of the local clock.
pub fn current_year() -> i32 {
    today().year()
}
