//! User preferences restored from a [`Storage`] at startup and written back
//! on every change.
//!
//! Reading a preference never fails: absent or corrupted values fall back to
//! their default.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Result;
use crate::storage::Storage;

pub const SHOW_HOLIDAYS_KEY: &str = "show-holidays";
pub const THEME_KEY: &str = "calendar-theme";
pub const SELECTED_DATES_KEY: &str = "selected-dates";

fn read(storage: &impl Storage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("Could not read `{key}` from storage: {_err}");
            None
        }
    }
}

// --
// -- Theme
// --

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl Display for UnknownTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown theme `{}`", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Stored theme, or the system preference if none was saved.
pub fn load_theme(storage: &impl Storage, prefers_dark: bool) -> Theme {
    read(storage, THEME_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn save_theme(storage: &mut impl Storage, theme: Theme) -> Result<()> {
    storage.set_item(THEME_KEY, &theme.to_string())
}

// --
// -- Holidays visibility
// --

pub fn load_show_holidays(storage: &impl Storage) -> bool {
    read(storage, SHOW_HOLIDAYS_KEY).as_deref() == Some("true")
}

pub fn save_show_holidays(storage: &mut impl Storage, value: bool) -> Result<()> {
    storage.set_item(SHOW_HOLIDAYS_KEY, &value.to_string())
}

// --
// -- Selection
// --

/// A set of selected dates.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Selection(BTreeSet<NaiveDate>);

impl Selection {
    /// Select a date if it isn't already, unselect it otherwise. Return `true`
    /// if the date is now selected.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use work_calendar::preferences::Selection;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let mut selection = Selection::default();
    ///
    /// assert!(selection.toggle(date));
    /// assert!(selection.is_selected(date));
    /// assert!(!selection.toggle(date));
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.0.remove(&date) {
            false
        } else {
            self.0.insert(date)
        }
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected dates in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }

    /// Encode as a JSON array of `YYYY-MM-DD` strings.
    pub fn to_json(&self) -> String {
        let dates: Vec<_> = self
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect();

        serde_json::Value::from(dates).to_string()
    }

    /// Decode a JSON array of dates. Invalid JSON gives an empty selection
    /// and entries which are not dates are skipped.
    ///
    /// ```
    /// use work_calendar::preferences::Selection;
    ///
    /// assert_eq!(Selection::from_json(r#"["2024-03-08", "nope"]"#).len(), 1);
    /// assert!(Selection::from_json("{").is_empty());
    /// ```
    pub fn from_json(raw: &str) -> Self {
        let Ok(dates) = serde_json::from_str::<Vec<String>>(raw) else {
            #[cfg(feature = "log")]
            log::warn!("Ignoring corrupted selection");
            return Self::default();
        };

        dates
            .iter()
            .filter_map(|date| date.parse().ok())
            .collect()
    }
}

impl FromIterator<NaiveDate> for Selection {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn load_selected_dates(storage: &impl Storage) -> Selection {
    read(storage, SELECTED_DATES_KEY)
        .map(|raw| Selection::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_selected_dates(storage: &mut impl Storage, selection: &Selection) -> Result<()> {
    storage.set_item(SELECTED_DATES_KEY, &selection.to_json())
}

// --
// -- Preferences
// --

/// User preferences attached to their storage.
#[derive(Clone, Debug)]
pub struct Preferences<S> {
    storage: S,
    show_holidays: bool,
    theme: Theme,
    selection: Selection,
}

impl<S: Storage> Preferences<S> {
    /// Restore preferences from the storage. The theme follows the system
    /// preference until one is saved.
    pub fn load(storage: S, prefers_dark: bool) -> Self {
        Self {
            show_holidays: load_show_holidays(&storage),
            theme: load_theme(&storage, prefers_dark),
            selection: load_selected_dates(&storage),
            storage,
        }
    }

    pub fn show_holidays(&self) -> bool {
        self.show_holidays
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Switch holidays visibility and return the new value.
    pub fn toggle_holidays(&mut self) -> bool {
        self.show_holidays = !self.show_holidays;
        Self::persist(save_show_holidays(&mut self.storage, self.show_holidays));
        self.show_holidays
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        Self::persist(save_theme(&mut self.storage, theme));
    }

    /// Switch between light and dark themes and return the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggle());
        self.theme
    }

    /// Select or unselect a date, return `true` if it is now selected.
    pub fn toggle_date(&mut self, date: NaiveDate) -> bool {
        let selected = self.selection.toggle(date);
        Self::persist(save_selected_dates(&mut self.storage, &self.selection));
        selected
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        Self::persist(save_selected_dates(&mut self.storage, &self.selection));
    }

    /// The in-memory state stays authoritative when the storage rejects a
    /// write.
    fn persist(result: Result<()>) {
        if let Err(_err) = result {
            #[cfg(feature = "log")]
            log::warn!("Could not save preferences: {_err}");
        }
    }
}
