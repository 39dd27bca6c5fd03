//! Holidays celebrated on the same date every year in Russia.
//!
//! Moving holidays and days off granted by decree are not listed here, they
//! are covered by the [production calendar](crate::production).

use std::collections::BTreeMap;

/// A named holiday.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Holiday {
    pub name: &'static str,
    /// This is an official day off.
    pub official: bool,
}

const fn official(name: &'static str) -> Holiday {
    Holiday { name, official: true }
}

const NEW_YEAR_BREAK: Holiday = official("Новогодние каникулы");

/// Fixed holidays, by 1-based month and day.
static FIXED_HOLIDAYS: [(u32, u32, Holiday); 14] = [
    (1, 1, official("Новый год")),
    (1, 2, NEW_YEAR_BREAK),
    (1, 3, NEW_YEAR_BREAK),
    (1, 4, NEW_YEAR_BREAK),
    (1, 5, NEW_YEAR_BREAK),
    (1, 6, NEW_YEAR_BREAK),
    (1, 7, official("Рождество Христово")),
    (1, 8, NEW_YEAR_BREAK),
    (2, 23, official("День защитника Отечества")),
    (3, 8, official("Международный женский день")),
    (5, 1, official("Праздник Весны и Труда")),
    (5, 9, official("День Победы")),
    (6, 12, official("День России")),
    (11, 4, official("День народного единства")),
];

/// Key of a date in the holiday table, formatted as `MM-DD`.
///
/// ```
/// use work_calendar::holidays::holiday_key;
///
/// assert_eq!(holiday_key(0, 7), "01-07");
/// assert_eq!(holiday_key(10, 4), "11-04");
/// ```
pub fn holiday_key(month0: u32, day: u32) -> String {
    format!("{:02}-{day:02}", u64::from(month0) + 1)
}

/// Iterate over all fixed holidays as `(key, holiday)` pairs, in calendar
/// order.
pub fn fixed_holidays() -> impl Iterator<Item = (String, &'static Holiday)> {
    FIXED_HOLIDAYS
        .iter()
        .map(|(month, day, holiday)| (holiday_key(month - 1, *day), holiday))
}

/// Get the holiday celebrated on a given day, if any.
///
/// ```
/// use work_calendar::holidays::get_holiday;
///
/// assert_eq!(get_holiday(0, 1).unwrap().name, "Новый год");
/// assert!(get_holiday(3, 15).is_none());
/// ```
pub fn get_holiday(month0: u32, day: u32) -> Option<&'static Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .find(|(m, d, _)| m - 1 == month0 && *d == day)
        .map(|(_, _, holiday)| holiday)
}

/// Get all holidays of a month, indexed by day of month.
pub fn get_month_holidays(month0: u32) -> BTreeMap<u32, &'static Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .filter(|(m, _, _)| m - 1 == month0)
        .map(|(_, day, holiday)| (*day, holiday))
        .collect()
}
