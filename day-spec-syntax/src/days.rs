use std::fmt::Display;

/// Highest day of month that can appear in a day list.
pub const MAX_DAY: u8 = 31;

// DayKind

/// How a listed day departs from a regular working day.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayKind {
    /// Bare `N`: a day off, either a holiday or a regular weekend.
    NonWorking,
    /// `N+`: a day off a holiday that fell on a weekend was moved to.
    Transferred,
    /// `N*`: a working day with reduced hours, usually a holiday's eve.
    Shortened,
}

impl DayKind {
    /// Does this kind of day count as a day off?
    ///
    /// ```
    /// use day_spec_syntax::DayKind;
    ///
    /// assert!(DayKind::Transferred.is_day_off());
    /// assert!(!DayKind::Shortened.is_day_off());
    /// ```
    pub fn is_day_off(self) -> bool {
        matches!(self, Self::NonWorking | Self::Transferred)
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::NonWorking => "",
            Self::Transferred => "+",
            Self::Shortened => "*",
        }
    }
}

// DayEntry

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayEntry {
    pub day: u8,
    pub kind: DayKind,
}

impl Display for DayEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.day, self.kind.suffix())
    }
}

// DayList

/// A parsed day list, in input order.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DayList {
    /// Valid entries, duplicates included.
    pub entries: Vec<DayEntry>,
    /// Trimmed text of the tokens that were skipped.
    pub rejected: Vec<String>,
}

impl DayList {
    /// Return `true` if no valid entry was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for DayList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.entries.iter();

        if let Some(first) = entries.next() {
            write!(f, "{first}")?;
        }

        for entry in entries {
            write!(f, ",{entry}")?;
        }

        Ok(())
    }
}
