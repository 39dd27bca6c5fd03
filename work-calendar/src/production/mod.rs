//! Official production calendar: days off, transferred days off and
//! shortened working days published for each year.
//!
//! The data is a JSON object keyed by year, each year listing its months in
//! the compact notation of [`day_spec_syntax`]:
//!
//! ```json
//! { "2025": { "months": [ { "month": 1, "days": "1,2,3,4,5,6,7,8,11,12" } ] } }
//! ```

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, LazyLock, OnceLock};

use day_spec_syntax::DayKind;
use flate2::bufread::DeflateDecoder;
use serde::Deserialize;

use crate::day_set::DaySet;
use crate::error::Result;

// --
// -- Month data
// --

/// Special days of a month in the production calendar.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct MonthCalendarData {
    /// Holidays, weekends and transferred days off.
    pub non_working_days: DaySet,
    /// Days off a holiday was moved to, always part of `non_working_days`.
    pub transferred_holidays: DaySet,
    /// Working days with reduced hours.
    pub shortened_days: DaySet,
}

/// Decode the day list of a month, such as `"1,2,3,8,9+,30*"`.
///
/// Tokens that are not a day of month are skipped.
///
/// ```
/// use work_calendar::production::parse_days;
///
/// let data = parse_days("1,2,3,4,5,6,7,8,9+,10,11,30*");
/// assert_eq!(data.non_working_days.count(), 11);
/// assert!(data.transferred_holidays.contains(9));
/// assert!(data.shortened_days.contains(30));
/// assert!(!data.non_working_days.contains(30));
/// ```
pub fn parse_days(spec: &str) -> MonthCalendarData {
    let mut res = MonthCalendarData::default();

    let days = match day_spec_syntax::parse(spec) {
        Ok(days) => days,
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("Ignoring unreadable day list `{spec}`: {_err}");
            return res;
        }
    };

    for entry in days.entries {
        let day = u32::from(entry.day);

        match entry.kind {
            DayKind::NonWorking => {
                res.non_working_days.insert(day);
            }
            DayKind::Transferred => {
                res.non_working_days.insert(day);
                res.transferred_holidays.insert(day);
            }
            DayKind::Shortened => {
                res.shortened_days.insert(day);
            }
        }
    }

    res
}

// --
// -- Year data
// --

/// Parsed production calendar of a year.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct ProductionYear {
    months: [Option<MonthCalendarData>; 12],
}

impl ProductionYear {
    /// Data for a 0-based month, if it was published.
    pub fn month(&self, month0: u32) -> Option<&MonthCalendarData> {
        self.months.get(month0 as usize)?.as_ref()
    }

    /// Iterate over published months as `(month0, data)` pairs.
    pub fn months(&self) -> impl Iterator<Item = (u32, &MonthCalendarData)> + '_ {
        (0..)
            .zip(&self.months)
            .filter_map(|(month0, data)| Some((month0, data.as_ref()?)))
    }
}

#[derive(Clone, Debug, Deserialize)]
struct RawYear {
    months: Vec<RawMonth>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawMonth {
    /// 1-based month.
    month: u32,
    #[serde(default)]
    days: String,
}

impl RawYear {
    fn parse(&self, _year: i32) -> ProductionYear {
        let mut res = ProductionYear::default();

        for raw in &self.months {
            let Some(slot) = raw
                .month
                .checked_sub(1)
                .and_then(|month0| res.months.get_mut(month0 as usize))
            else {
                #[cfg(feature = "log")]
                log::warn!("Skipping invalid month {} of {_year}", raw.month);
                continue;
            };

            let data = parse_days(&raw.days);

            #[cfg(feature = "log")]
            if !data.shortened_days.is_disjoint(data.non_working_days) {
                log::warn!(
                    "Days {:?} of {}-{:02} are both shortened and non-working",
                    data.shortened_days.intersection(data.non_working_days),
                    _year,
                    raw.month,
                );
            }

            *slot = Some(data);
        }

        res
    }
}

#[derive(Debug)]
struct YearEntry {
    raw: RawYear,
    parsed: OnceLock<ProductionYear>,
}

// --
// -- Calendar
// --

/// Production calendars of a set of years.
///
/// The data of a year is parsed the first time it is accessed and kept for
/// the lifetime of the calendar.
#[derive(Debug, Default)]
pub struct ProductionCalendar {
    years: BTreeMap<i32, YearEntry>,
}

impl ProductionCalendar {
    /// A calendar without data for any year.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a calendar from its JSON representation.
    ///
    /// ```
    /// use work_calendar::ProductionCalendar;
    ///
    /// let calendar = ProductionCalendar::from_json(
    ///     r#"{ "2025": { "months": [{ "month": 5, "days": "1,2+,3,4,8+,9,10" }] } }"#,
    /// )
    /// .unwrap();
    ///
    /// assert!(calendar.is_transferred_holiday(2025, 4, 2));
    /// assert!(!calendar.is_transferred_holiday(2025, 4, 1));
    /// assert!(!calendar.is_non_working_day(2024, 4, 1));
    /// ```
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(Self::from_raw(serde_json::from_str(data)?))
    }

    /// Load a calendar from a reader over its JSON representation.
    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        Ok(Self::from_raw(serde_json::from_reader(reader)?))
    }

    fn from_raw(raw: BTreeMap<String, RawYear>) -> Self {
        let years = raw
            .into_iter()
            .filter_map(|(key, raw)| {
                let Ok(year) = key.trim().parse() else {
                    #[cfg(feature = "log")]
                    log::warn!("Skipping production calendar with invalid year `{key}`");
                    return None;
                };

                Some((year, YearEntry { raw, parsed: OnceLock::new() }))
            })
            .collect();

        Self { years }
    }

    /// The calendar compiled into this crate.
    ///
    /// ```
    /// use work_calendar::ProductionCalendar;
    ///
    /// let calendar = ProductionCalendar::embedded();
    /// assert!(calendar.has_data_for_year(2025));
    /// assert!(calendar.is_transferred_holiday(2025, 11, 31));
    /// ```
    pub fn embedded() -> Arc<Self> {
        static EMBEDDED: LazyLock<Arc<ProductionCalendar>> = LazyLock::new(|| {
            let reader =
                DeflateDecoder::new(include_bytes!(env!("PRODUCTION_CALENDAR_FILE")).as_slice());

            let calendar = match ProductionCalendar::from_reader(reader) {
                Ok(calendar) => calendar,
                Err(_err) => {
                    #[cfg(feature = "log")]
                    log::error!("Unable to load embedded production calendar: {_err}");
                    ProductionCalendar::empty()
                }
            };

            Arc::new(calendar)
        });

        EMBEDDED.clone()
    }

    /// Parsed data of a year, if the year is part of this calendar.
    pub fn get_year_data(&self, year: i32) -> Option<&ProductionYear> {
        let entry = self.years.get(&year)?;
        Some(entry.parsed.get_or_init(|| entry.raw.parse(year)))
    }

    pub fn has_data_for_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Years covered by this calendar, in ascending order.
    pub fn available_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    fn month_data(&self, year: i32, month0: u32) -> Option<&MonthCalendarData> {
        self.get_year_data(year)?.month(month0)
    }

    /// The day is a holiday, a weekend or a transferred day off. Always
    /// `false` for years and months without data.
    pub fn is_non_working_day(&self, year: i32, month0: u32, day: u32) -> bool {
        self.month_data(year, month0)
            .is_some_and(|data| data.non_working_days.contains(day))
    }

    /// A holiday that fell on a weekend was moved to this day.
    pub fn is_transferred_holiday(&self, year: i32, month0: u32, day: u32) -> bool {
        self.month_data(year, month0)
            .is_some_and(|data| data.transferred_holidays.contains(day))
    }

    /// The day is worked with reduced hours.
    pub fn is_shortened_day(&self, year: i32, month0: u32, day: u32) -> bool {
        self.month_data(year, month0)
            .is_some_and(|data| data.shortened_days.contains(day))
    }
}
