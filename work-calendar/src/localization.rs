//! Names displayed for months and weekdays.

/// Provides the words used to present a calendar.
pub trait Localize {
    /// Name of a 0-based month, in lower case, as it would be written on its
    /// own (nominative case). Empty for an invalid month.
    fn month_name(&self, month0: u32) -> &str;

    /// Abbreviated name of a weekday, from its Monday-first index.
    fn weekday_short(&self, weekday_index: u32) -> &str;
}

/// Russian names.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Russian;

impl Russian {
    const MONTHS: [&'static str; 12] = [
        "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ];

    const WEEKDAYS: [&'static str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];
}

impl Localize for Russian {
    fn month_name(&self, month0: u32) -> &str {
        Self::MONTHS.get(month0 as usize).copied().unwrap_or_default()
    }

    fn weekday_short(&self, weekday_index: u32) -> &str {
        Self::WEEKDAYS
            .get(weekday_index as usize)
            .copied()
            .unwrap_or_default()
    }
}

/// Upper-case the first letter of a word.
///
/// ```
/// use work_calendar::localization::capitalize;
///
/// assert_eq!(capitalize("январь"), "Январь");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
