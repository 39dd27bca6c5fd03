//! Year bounds and the mapping from paths to the displayed year.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Lowest year that can be displayed.
pub const MIN_YEAR: i32 = 1900;

/// Highest year that can be displayed.
pub const MAX_YEAR: i32 = 2100;

/// First year offered by the year picker.
pub const PICKER_YEAR_START: i32 = 1950;

/// Last year offered by the year picker.
pub const PICKER_YEAR_END: i32 = 2050;

pub fn is_valid_year(year: i32, min: i32, max: i32) -> bool {
    (min..=max).contains(&year)
}

/// Years from `start` to `end`, both included.
///
/// ```
/// use work_calendar::routing::{year_range, PICKER_YEAR_END, PICKER_YEAR_START};
///
/// let years: Vec<_> = year_range(PICKER_YEAR_START, PICKER_YEAR_END).collect();
/// assert_eq!(years.len(), 101);
/// assert_eq!(years[0], 1950);
/// ```
pub fn year_range(start: i32, end: i32) -> RangeInclusive<i32> {
    start..=end
}

/// Where a path leads.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Route {
    /// Display the calendar of this year.
    Year(i32),
    /// The path is not a valid calendar, go to this year instead.
    Redirect(i32),
}

impl Route {
    /// Resolve a path of the form `/year/<year>`. Any other path, or a year
    /// out of [`MIN_YEAR`]..=[`MAX_YEAR`], redirects to `current_year`.
    ///
    /// ```
    /// use work_calendar::routing::Route;
    ///
    /// assert_eq!(Route::resolve("/year/1987", 2025), Route::Year(1987));
    /// assert_eq!(Route::resolve("/", 2025), Route::Redirect(2025));
    /// assert_eq!(Route::resolve("/year/3000", 2025), Route::Redirect(2025));
    /// ```
    pub fn resolve(path: &str, current_year: i32) -> Self {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());

        let year = match (segments.next(), segments.next(), segments.next()) {
            (Some("year"), Some(year), None) => year.parse().ok(),
            _ => None,
        };

        match year {
            Some(year) if is_valid_year(year, MIN_YEAR, MAX_YEAR) => Self::Year(year),
            _ => Self::Redirect(current_year),
        }
    }

    /// Year displayed after following this route.
    pub fn year(self) -> i32 {
        match self {
            Self::Year(year) | Self::Redirect(year) => year,
        }
    }

    /// Canonical path of the displayed year.
    pub fn path(self) -> String {
        format!("/year/{}", self.year())
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(year) => write!(f, "year {year}"),
            Self::Redirect(year) => write!(f, "redirect to year {year}"),
        }
    }
}
