use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::dates::{is_weekend, today, weekday_index};
use crate::holidays::{get_holiday, Holiday};
use crate::localization::{Localize, Russian};
use crate::matrix::{build_month_matrix, build_year_calendar, MonthData};
use crate::production::ProductionCalendar;

// --
// -- Annotations
// --

/// Everything known about a single date.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct DayAnnotation {
    /// Saturday or Sunday.
    pub weekend: bool,
    /// Fixed-date holiday celebrated on this day.
    pub holiday: Option<&'static Holiday>,
    pub non_working: bool,
    pub transferred: bool,
    pub shortened: bool,
}

impl DayAnnotation {
    /// The day is not worked: use the production calendar when it has data
    /// for this day and fall back to weekends otherwise.
    pub fn is_day_off(&self, has_production_data: bool) -> bool {
        if has_production_data {
            self.non_working
        } else {
            self.weekend
        }
    }
}

// --
// -- Context
// --

/// All the inputs a calendar is built from.
#[derive(Clone, Debug)]
pub struct Context<L = Russian> {
    /// Date highlighted as today.
    pub today: NaiveDate,
    pub production: Arc<ProductionCalendar>,
    pub locale: L,
}

impl<L> Context<L> {
    /// Attach a new reference date.
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }

    /// Attach a new production calendar.
    pub fn with_production(self, production: Arc<ProductionCalendar>) -> Self {
        Self { production, ..self }
    }

    /// Attach a new locale component to this context.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context { today: self.today, production: self.production, locale }
    }

    /// Describe a date from the fixed holidays and the production calendar.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use work_calendar::Context;
    ///
    /// let ctx = Context::default();
    /// let annotation = ctx.annotate(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap());
    ///
    /// assert_eq!(annotation.holiday.unwrap().name, "День Победы");
    /// assert!(annotation.non_working);
    /// assert!(!annotation.weekend);
    /// ```
    pub fn annotate(&self, date: NaiveDate) -> DayAnnotation {
        let (year, month0, day) = (date.year(), date.month0(), date.day());

        DayAnnotation {
            weekend: is_weekend(weekday_index(date)),
            holiday: get_holiday(month0, day),
            non_working: self.production.is_non_working_day(year, month0, day),
            transferred: self.production.is_transferred_holiday(year, month0, day),
            shortened: self.production.is_shortened_day(year, month0, day),
        }
    }
}

impl<L: Localize> Context<L> {
    /// Build a single 0-based month, an invalid month has no name and no
    /// weeks.
    pub fn build_month(&self, year: i32, month0: u32) -> MonthData {
        MonthData {
            month_index: month0,
            name: crate::localization::capitalize(self.locale.month_name(month0)),
            year,
            matrix: build_month_matrix(year, month0, self.today),
        }
    }

    /// Build the twelve months of a year.
    pub fn build_year_calendar(&self, year: i32) -> Vec<MonthData> {
        build_year_calendar(year, self.today, &self.locale)
    }
}

impl Default for Context<Russian> {
    /// Today's date from the local clock and the embedded production
    /// calendar.
    fn default() -> Self {
        Self {
            today: today(),
            production: ProductionCalendar::embedded(),
            locale: Russian,
        }
    }
}
