//! Layout of months as grids of weeks, starting on Monday.

use chrono::{Datelike, NaiveDate};

use crate::dates::{days_in_month, is_same_day, is_weekend, weekday_index, SUNDAY};
use crate::localization::{capitalize, Localize};

// DayCell

/// A day of the displayed month.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_today: bool,
}

/// A cell of a month grid: either a day of the month or padding before the
/// first day or after the last one.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum DayCell {
    #[default]
    Blank,
    Day(CalendarDay),
}

impl DayCell {
    pub fn as_day(&self) -> Option<&CalendarDay> {
        match self {
            Self::Blank => None,
            Self::Day(day) => Some(day),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Day of month.
    pub fn day(&self) -> Option<u32> {
        self.date().map(|date| date.day())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.as_day().map(|day| day.date)
    }

    /// Date formatted as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> Option<String> {
        self.date().map(|date| date.format("%Y-%m-%d").to_string())
    }

    pub fn is_weekend(&self) -> bool {
        self.as_day().is_some_and(|day| day.is_weekend)
    }

    pub fn is_today(&self) -> bool {
        self.as_day().is_some_and(|day| day.is_today)
    }
}

// MonthMatrix

/// Seven cells, from Monday to Sunday.
pub type Week = [DayCell; 7];

/// The weeks covering a month.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct MonthMatrix {
    pub weeks: Vec<Week>,
}

impl MonthMatrix {
    /// Iterate over the days of the month, skipping padding cells.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.weeks.iter().flatten().filter_map(DayCell::as_day)
    }
}

/// Build the grid of a 0-based month, flagging `today` if it belongs to the
/// month.
///
/// The first week is padded with blank cells before the first day of month
/// and the last week is padded after its last day. A month that can't be
/// represented results in an empty grid.
///
/// ```
/// use chrono::NaiveDate;
/// use work_calendar::matrix::build_month_matrix;
///
/// // February 2021 starts on a Monday and has 28 days.
/// let today = NaiveDate::from_ymd_opt(2021, 2, 14).unwrap();
/// let matrix = build_month_matrix(2021, 1, today);
///
/// assert_eq!(matrix.weeks.len(), 4);
/// assert_eq!(matrix.weeks[0][0].day(), Some(1));
/// assert!(matrix.weeks[1][6].is_today());
/// ```
pub fn build_month_matrix(year: i32, month0: u32, today: NaiveDate) -> MonthMatrix {
    let Some(first) = (month0 < 12)
        .then(|| NaiveDate::from_ymd_opt(year, month0 + 1, 1))
        .flatten()
    else {
        #[cfg(feature = "log")]
        log::warn!("Can't build a calendar for month {month0} of {year}");
        return MonthMatrix::default();
    };

    let mut weeks = Vec::with_capacity(6);
    let mut week = Week::default();
    let mut pending = false;

    for date in first.iter_days().take(days_in_month(year, month0) as usize) {
        let col = weekday_index(date);

        week[col as usize] = DayCell::Day(CalendarDay {
            date,
            is_weekend: is_weekend(col),
            is_today: is_same_day(&date, &today),
        });

        pending = true;

        if col == SUNDAY {
            weeks.push(std::mem::take(&mut week));
            pending = false;
        }
    }

    if pending {
        weeks.push(week);
    }

    MonthMatrix { weeks }
}

// MonthData

/// A month ready to be displayed.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthData {
    /// 0-based month index.
    pub month_index: u32,
    /// Capitalized month name.
    pub name: String,
    pub year: i32,
    pub matrix: MonthMatrix,
}

/// Build the twelve months of a year.
pub fn build_year_calendar(year: i32, today: NaiveDate, locale: &impl Localize) -> Vec<MonthData> {
    (0..12)
        .map(|month_index| MonthData {
            month_index,
            name: capitalize(locale.month_name(month_index)),
            year,
            matrix: build_month_matrix(year, month_index, today),
        })
        .collect()
}
